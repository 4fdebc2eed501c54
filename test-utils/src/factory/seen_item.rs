//! Feed bookkeeping factory for creating test `seen_item` rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a seen item row with an explicit timestamp.
///
/// # Arguments
/// - `db` - Database connection
/// - `subreddit` - Subreddit the feed belongs to
/// - `source` - Feed source name (`new`, `comments`, ...)
/// - `item_key` - Seen key of the item
/// - `seen_at` - When the item was recorded
///
/// # Returns
/// - `Ok(entity::seen_item::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_seen_item_at(
    db: &DatabaseConnection,
    subreddit: &str,
    source: &str,
    item_key: &str,
    seen_at: DateTime<Utc>,
) -> Result<entity::seen_item::Model, DbErr> {
    entity::seen_item::ActiveModel {
        id: ActiveValue::NotSet,
        subreddit: ActiveValue::Set(subreddit.to_string()),
        source: ActiveValue::Set(source.to_string()),
        item_key: ActiveValue::Set(item_key.to_string()),
        seen_at: ActiveValue::Set(seen_at),
    }
    .insert(db)
    .await
}

/// Creates a seen item row recorded now.
pub async fn create_seen_item(
    db: &DatabaseConnection,
    subreddit: &str,
    source: &str,
    item_key: &str,
) -> Result<entity::seen_item::Model, DbErr> {
    create_seen_item_at(db, subreddit, source, item_key, Utc::now()).await
}
