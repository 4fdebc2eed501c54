use sea_orm::entity::prelude::*;

/// A (subreddit, feed) pair whose backlog has been recorded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feed_state")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subreddit: String,
    pub source: String,
    pub initialized_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
