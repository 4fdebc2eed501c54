//! Reaction configuration and the outcome of applying a reaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::reddit::{ItemKind, RedditItem};

/// Ban issued alongside a reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanConfig {
    /// Ban length in days, permanent when absent.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Message sent to the banned user.
    #[serde(default)]
    pub message: Option<String>,
    /// Internal ban reason shown to moderators.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Moderation action bound to an emoji.
///
/// Unicode emoji are stored as-is, custom emoji as `<:name:id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionConfig {
    pub emoji: String,
    /// Item kinds this reaction is offered on.
    pub types: Vec<ItemKind>,
    /// Approve the item; otherwise it is removed.
    #[serde(default)]
    pub approve: bool,
    /// Remove as spam. Ignored when approving.
    #[serde(default)]
    pub spam: bool,
    #[serde(default)]
    pub lock: bool,
    /// Reply posted on the item.
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub ban: Option<BanConfig>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ReactionConfig {
    pub fn applies_to(&self, kind: ItemKind) -> bool {
        self.types.contains(&kind)
    }

    /// Description shown in the reactions embed, derived from the actions if unset.
    pub fn summary(&self) -> String {
        if let Some(description) = &self.description {
            return description.clone();
        }

        let mut parts = vec![if self.approve {
            "Approve"
        } else if self.spam {
            "Remove as spam"
        } else {
            "Remove"
        }
        .to_string()];
        if self.lock {
            parts.push("lock".to_string());
        }
        if self.reply.is_some() {
            parts.push("reply".to_string());
        }
        if let Some(ban) = &self.ban {
            parts.push(match ban.duration {
                Some(days) => format!("ban for {} days", days),
                None => "ban permanently".to_string(),
            });
        }
        parts.join(", ")
    }
}

/// Reactions offered when a subreddit configures none.
pub fn default_reactions() -> Vec<ReactionConfig> {
    let posts = vec![ItemKind::Submission, ItemKind::Comment];
    let base = ReactionConfig {
        emoji: String::new(),
        types: posts.clone(),
        approve: false,
        spam: false,
        lock: false,
        reply: None,
        ban: None,
        description: None,
    };

    vec![
        ReactionConfig {
            emoji: "✔".to_string(),
            approve: true,
            description: Some("Approve".to_string()),
            ..base.clone()
        },
        ReactionConfig {
            emoji: "❌".to_string(),
            description: Some("Remove".to_string()),
            ..base.clone()
        },
        ReactionConfig {
            emoji: "💣".to_string(),
            spam: true,
            description: Some("Remove as spam".to_string()),
            ..base.clone()
        },
        ReactionConfig {
            emoji: "🔒".to_string(),
            types: vec![ItemKind::Submission],
            approve: true,
            lock: true,
            description: Some("Approve and lock".to_string()),
            ..base.clone()
        },
        ReactionConfig {
            emoji: "✉".to_string(),
            types: vec![ItemKind::Message],
            approve: true,
            description: Some("Mark as read".to_string()),
            ..base
        },
    ]
}

/// Outcome of applying a reaction to a Reddit item.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    pub item: RedditItem,
    pub emoji: String,
    pub approved: bool,
    /// Human-readable actions, e.g. `approved`, `locked`, `banned /u/x for 3 days`.
    pub actions: Vec<String>,
    /// Display name of the Discord moderator.
    pub moderator: String,
    pub moderator_id: u64,
    pub created_at: DateTime<Utc>,
}

impl ActionResult {
    /// Actions joined for prose, e.g. `approved and locked`, `removed, locked and banned`.
    pub fn actions_text(&self) -> String {
        match self.actions.as_slice() {
            [] => "handled".to_string(),
            [only] => only.clone(),
            [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
        }
    }
}
