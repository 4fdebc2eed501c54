//! Initialized feed repository.
//!
//! A feed is initialized once its first poll recorded the backlog. The marker is
//! kept for good, so a feed that stays empty or whose seen keys were pruned still
//! mirrors its next item.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct FeedStateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedStateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether the first poll of a feed already happened.
    pub async fn is_initialized(&self, subreddit: &str, source: &str) -> Result<bool, DbErr> {
        let row = entity::prelude::FeedState::find()
            .filter(entity::feed_state::Column::Subreddit.eq(subreddit))
            .filter(entity::feed_state::Column::Source.eq(source))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Marks a feed as initialized.
    ///
    /// Call only after `is_initialized` returned false; the pair is unique.
    ///
    /// # Returns
    /// - `Ok(())` - Marker stored
    /// - `Err(DbErr)` - Insert failed, e.g. the feed was already initialized
    pub async fn mark_initialized(
        &self,
        subreddit: &str,
        source: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::FeedState::insert(entity::feed_state::ActiveModel {
            id: ActiveValue::NotSet,
            subreddit: ActiveValue::Set(subreddit.to_string()),
            source: ActiveValue::Set(source.to_string()),
            initialized_at: ActiveValue::Set(at),
        })
        .exec(self.db)
        .await?;

        Ok(())
    }
}
