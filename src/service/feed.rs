//! Feed polling.
//!
//! Each (subreddit, feed) pair remembers the seen keys of the items it already
//! mirrored. The first poll of a pair only records its backlog and marks the pair
//! initialized, even when the feed is empty.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    data::{feed_state::FeedStateRepository, seen_item::SeenItemRepository},
    error::AppError,
    model::{
        reddit::{ItemSource, RedditItem},
        settings::BotSettings,
    },
    reddit::{feed::DEFAULT_LIMIT, RedditClient},
};

/// How long seen keys are kept after their item was last present in a feed.
pub const SEEN_RETENTION_DAYS: i64 = 7;

pub struct FeedService<'a> {
    db: &'a DatabaseConnection,
    reddit: &'a RedditClient,
}

impl<'a> FeedService<'a> {
    pub fn new(db: &'a DatabaseConnection, reddit: &'a RedditClient) -> Self {
        Self { db, reddit }
    }

    /// Fetches a feed and returns the items not mirrored before, oldest first.
    ///
    /// # Arguments
    /// - `subreddit` - Subreddit name
    /// - `source` - Feed to poll
    ///
    /// # Returns
    /// - `Ok(Vec<RedditItem>)` - New items; empty on the first poll of the feed
    /// - `Err(AppError)` - Reddit or database failure
    pub async fn poll(
        &self,
        subreddit: &str,
        source: ItemSource,
    ) -> Result<Vec<RedditItem>, AppError> {
        let items = self.reddit.fetch(subreddit, source, DEFAULT_LIMIT).await?;

        let repo = SeenItemRepository::new(self.db);
        let feed_state = FeedStateRepository::new(self.db);
        let feed = source.as_str();
        let keys: Vec<String> = items.iter().map(RedditItem::seen_key).collect();
        let now = Utc::now();

        if !feed_state.is_initialized(subreddit, feed).await? {
            repo.insert_many(subreddit, feed, &keys, now).await?;
            feed_state.mark_initialized(subreddit, feed, now).await?;
            tracing::info!(
                "Recorded backlog of {} {} items for r/{}",
                keys.len(),
                feed,
                subreddit
            );
            return Ok(Vec::new());
        }

        if items.is_empty() {
            return Ok(Vec::new());
        }

        let unseen = repo.filter_unseen(subreddit, feed, &keys).await?;
        repo.touch(subreddit, feed, &keys, now).await?;
        repo.insert_many(subreddit, feed, &unseen, now).await?;

        let mut pending: HashSet<String> = unseen.into_iter().collect();
        let mut new_items: Vec<RedditItem> = items
            .into_iter()
            .filter(|item| pending.remove(&item.seen_key()))
            .collect();
        new_items.reverse();

        Ok(new_items)
    }

    /// Polls every enabled feed of every subreddit.
    ///
    /// A failing feed is logged and skipped.
    pub async fn poll_all(&self, settings: &BotSettings) -> Vec<RedditItem> {
        let mut items = Vec::new();

        for sub in &settings.subreddits {
            for source in sub.enabled_sources() {
                match self.poll(&sub.name, source).await {
                    Ok(mut new_items) => items.append(&mut new_items),
                    Err(e) => tracing::error!(
                        "Failed to poll {} feed of r/{}: {}",
                        source,
                        sub.name,
                        e
                    ),
                }
            }
        }

        items
    }

    /// Forgets seen keys that dropped out of their feeds.
    pub async fn prune(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let cutoff = now - Duration::days(SEEN_RETENTION_DAYS);

        Ok(SeenItemRepository::new(self.db)
            .prune_older_than(cutoff)
            .await?)
    }
}
