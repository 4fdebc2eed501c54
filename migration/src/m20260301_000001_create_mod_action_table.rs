use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModAction::Table)
                    .if_not_exists()
                    .col(pk_auto(ModAction::Id))
                    .col(string(ModAction::Moderator))
                    .col(string(ModAction::ModeratorId))
                    .col(string(ModAction::ItemId))
                    .col(string(ModAction::ItemKind))
                    .col(string(ModAction::Subreddit))
                    .col(string_null(ModAction::Author))
                    .col(string(ModAction::Emoji))
                    .col(boolean(ModAction::Approved))
                    .col(text(ModAction::Actions))
                    .col(
                        timestamp(ModAction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(ModAction::ExportedAt))
                    .to_owned(),
            )
            .await?;

        // Stats group by moderator
        manager
            .create_index(
                Index::create()
                    .name("idx_mod_action_moderator")
                    .table(ModAction::Table)
                    .col(ModAction::Moderator)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mod_action_exported_at")
                    .table(ModAction::Table)
                    .col(ModAction::ExportedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_mod_action_exported_at")
                    .table(ModAction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_mod_action_moderator")
                    .table(ModAction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ModAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModAction {
    Table,
    Id,
    Moderator,
    ModeratorId,
    ItemId,
    ItemKind,
    Subreddit,
    Author,
    Emoji,
    Approved,
    Actions,
    CreatedAt,
    ExportedAt,
}
