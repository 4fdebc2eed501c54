use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedState::Table)
                    .if_not_exists()
                    .col(pk_auto(FeedState::Id))
                    .col(string(FeedState::Subreddit))
                    .col(string(FeedState::Source))
                    .col(
                        timestamp(FeedState::InitializedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feed_state_unique")
                    .table(FeedState::Table)
                    .col(FeedState::Subreddit)
                    .col(FeedState::Source)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_feed_state_unique")
                    .table(FeedState::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FeedState::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeedState {
    Table,
    Id,
    Subreddit,
    Source,
    InitializedAt,
}
