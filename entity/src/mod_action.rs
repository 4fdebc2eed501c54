use sea_orm::entity::prelude::*;

/// One moderation action taken through a Discord reaction.
///
/// Rows are only ever inserted; `exported_at` is the single column updated
/// afterwards, once the row has been mirrored to the document store.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mod_action")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub moderator: String,
    pub moderator_id: String,
    pub item_id: String,
    pub item_kind: String,
    pub subreddit: String,
    pub author: Option<String>,
    pub emoji: String,
    pub approved: bool,
    /// JSON array of human-readable action descriptions.
    pub actions: String,
    pub created_at: DateTimeUtc,
    pub exported_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
