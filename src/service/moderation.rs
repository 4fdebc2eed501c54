//! Applying a reaction to a Reddit item.

use chrono::Utc;

use crate::{
    error::AppError,
    model::{
        reaction::{ActionResult, BanConfig, ReactionConfig},
        reddit::{ItemKind, RedditItem},
    },
    reddit::RedditClient,
};

/// Moderator a reaction is applied on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moderator {
    /// Guild nickname, falling back to the Discord username.
    pub name: String,
    pub discord_id: u64,
}

pub struct ModerationService<'a> {
    reddit: &'a RedditClient,
}

impl<'a> ModerationService<'a> {
    pub fn new(reddit: &'a RedditClient) -> Self {
        Self { reddit }
    }

    /// Performs the Reddit actions a reaction maps to.
    ///
    /// Messages are marked read; submissions and comments are approved or removed.
    /// Lock, reply and ban follow when configured. A ban is skipped when the author
    /// account no longer exists.
    ///
    /// # Arguments
    /// - `item` - Item the reaction was added to
    /// - `reaction` - Matched reaction configuration
    /// - `moderator` - Discord moderator who reacted
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - Actions performed, ready to be posted and logged
    /// - `Err(AppError::RedditErr)` - A Reddit call failed; earlier calls are not undone
    pub async fn apply(
        &self,
        item: &RedditItem,
        reaction: &ReactionConfig,
        moderator: &Moderator,
    ) -> Result<ActionResult, AppError> {
        let fullname = item.fullname();
        let mut actions = Vec::new();

        if item.kind == ItemKind::Message {
            self.reddit.mark_read(&fullname).await?;
            actions.push("marked as read".to_string());
        } else if reaction.approve {
            self.reddit.approve(&fullname).await?;
            actions.push("approved".to_string());
        } else {
            self.reddit.remove(&fullname, reaction.spam).await?;
            actions.push(if reaction.spam { "removed as spam" } else { "removed" }.to_string());
        }

        if reaction.lock && item.kind != ItemKind::Message {
            self.reddit.lock(&fullname).await?;
            actions.push("locked".to_string());
        }

        if let Some(reply) = &reaction.reply {
            self.reddit.reply(&fullname, reply).await?;
            actions.push("replied to".to_string());
        }

        if let Some(ban) = &reaction.ban {
            match &item.author {
                Some(author) => {
                    self.reddit.ban(&item.subreddit, author, ban).await?;
                    actions.push(ban_text(author, ban));
                }
                None => tracing::warn!(
                    "Skipping ban for {}: author account no longer exists",
                    fullname
                ),
            }
        }

        Ok(ActionResult {
            item: item.clone(),
            emoji: reaction.emoji.clone(),
            approved: reaction.approve,
            actions,
            moderator: moderator.name.clone(),
            moderator_id: moderator.discord_id,
            created_at: Utc::now(),
        })
    }
}

fn ban_text(author: &str, ban: &BanConfig) -> String {
    match ban.duration {
        Some(1) => format!("banned /u/{} for 1 day", author),
        Some(days) => format!("banned /u/{} for {} days", author, days),
        None => format!("banned /u/{} permanently", author),
    }
}
