use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeenItem::Table)
                    .if_not_exists()
                    .col(pk_auto(SeenItem::Id))
                    .col(string(SeenItem::Subreddit))
                    .col(string(SeenItem::Source))
                    .col(string(SeenItem::ItemKey))
                    .col(
                        timestamp(SeenItem::SeenAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per key per feed
        manager
            .create_index(
                Index::create()
                    .name("idx_seen_item_unique")
                    .table(SeenItem::Table)
                    .col(SeenItem::Subreddit)
                    .col(SeenItem::Source)
                    .col(SeenItem::ItemKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seen_item_seen_at")
                    .table(SeenItem::Table)
                    .col(SeenItem::SeenAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_seen_item_seen_at")
                    .table(SeenItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_seen_item_unique")
                    .table(SeenItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeenItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeenItem {
    Table,
    Id,
    Subreddit,
    Source,
    ItemKey,
    SeenAt,
}
