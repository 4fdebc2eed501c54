//! Feed bookkeeping repository.
//!
//! Remembers which items of each (subreddit, feed) pair were already mirrored so a
//! restart does not post them again.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};
use std::collections::HashSet;

/// Repository providing database operations for seen feed items.
pub struct SeenItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeenItemRepository<'a> {
    /// Creates a new SeenItemRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the keys not yet recorded for a feed, in the given order.
    ///
    /// # Arguments
    /// - `subreddit` - Subreddit of the feed
    /// - `source` - Feed name
    /// - `keys` - Seen keys of the items just fetched
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Unseen keys, duplicates removed
    /// - `Err(DbErr)` - Database error during query
    pub async fn filter_unseen(
        &self,
        subreddit: &str,
        source: &str,
        keys: &[String],
    ) -> Result<Vec<String>, DbErr> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let existing: HashSet<String> = entity::prelude::SeenItem::find()
            .select_only()
            .column(entity::seen_item::Column::ItemKey)
            .filter(entity::seen_item::Column::Subreddit.eq(subreddit))
            .filter(entity::seen_item::Column::Source.eq(source))
            .filter(entity::seen_item::Column::ItemKey.is_in(keys.iter().cloned()))
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let mut returned = HashSet::new();
        Ok(keys
            .iter()
            .filter(|key| !existing.contains(*key) && returned.insert(*key))
            .cloned()
            .collect())
    }

    /// Records keys as seen for a feed.
    ///
    /// Callers pass keys returned by `filter_unseen`; duplicates within `keys` are
    /// inserted once. An empty slice is a no-op.
    pub async fn insert_many(
        &self,
        subreddit: &str,
        source: &str,
        keys: &[String],
        seen_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let mut unique = HashSet::new();
        let rows: Vec<entity::seen_item::ActiveModel> = keys
            .iter()
            .filter(|key| unique.insert(key.as_str()))
            .map(|key| entity::seen_item::ActiveModel {
                id: ActiveValue::NotSet,
                subreddit: ActiveValue::Set(subreddit.to_string()),
                source: ActiveValue::Set(source.to_string()),
                item_key: ActiveValue::Set(key.clone()),
                seen_at: ActiveValue::Set(seen_at),
            })
            .collect();

        if rows.is_empty() {
            return Ok(());
        }

        entity::prelude::SeenItem::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Refreshes the timestamp of keys still present in a feed so they outlive pruning.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows refreshed
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch(
        &self,
        subreddit: &str,
        source: &str,
        keys: &[String],
        seen_at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        if keys.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::SeenItem::update_many()
            .col_expr(
                entity::seen_item::Column::SeenAt,
                sea_orm::sea_query::Expr::value(seen_at),
            )
            .filter(entity::seen_item::Column::Subreddit.eq(subreddit))
            .filter(entity::seen_item::Column::Source.eq(source))
            .filter(entity::seen_item::Column::ItemKey.is_in(keys.iter().cloned()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes rows recorded before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::SeenItem::delete_many()
            .filter(entity::seen_item::Column::SeenAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
