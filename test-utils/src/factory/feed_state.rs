//! Factory for marking feeds as initialized in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a (subreddit, feed) pair as already polled once.
///
/// # Returns
/// - `Ok(entity::feed_state::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feed_state(
    db: &DatabaseConnection,
    subreddit: &str,
    source: &str,
) -> Result<entity::feed_state::Model, DbErr> {
    entity::feed_state::ActiveModel {
        id: ActiveValue::NotSet,
        subreddit: ActiveValue::Set(subreddit.to_string()),
        source: ActiveValue::Set(source.to_string()),
        initialized_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
