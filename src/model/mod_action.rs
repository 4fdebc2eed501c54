//! Domain models for the moderation action log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::reaction::ActionResult;

/// A persisted moderation action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModActionRecord {
    pub id: i32,
    /// Display name of the Discord moderator.
    pub moderator: String,
    pub moderator_id: String,
    /// Fullname of the Reddit item acted on.
    pub item_id: String,
    pub item_kind: String,
    pub subreddit: String,
    pub author: Option<String>,
    pub emoji: String,
    pub approved: bool,
    pub actions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub exported_at: Option<DateTime<Utc>>,
}

impl ModActionRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// An `actions` column that is not a JSON array is kept as a single action so a
    /// hand-edited row never hides from the statistics.
    pub fn from_entity(entity: entity::mod_action::Model) -> Self {
        let actions = serde_json::from_str::<Vec<String>>(&entity.actions)
            .unwrap_or_else(|_| vec![entity.actions.clone()]);

        Self {
            id: entity.id,
            moderator: entity.moderator,
            moderator_id: entity.moderator_id,
            item_id: entity.item_id,
            item_kind: entity.item_kind,
            subreddit: entity.subreddit,
            author: entity.author,
            emoji: entity.emoji,
            approved: entity.approved,
            actions,
            created_at: entity.created_at,
            exported_at: entity.exported_at,
        }
    }
}

/// Parameters for appending an action to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateModActionParams {
    pub moderator: String,
    pub moderator_id: u64,
    pub item_id: String,
    pub item_kind: String,
    pub subreddit: String,
    pub author: Option<String>,
    pub emoji: String,
    pub approved: bool,
    pub actions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CreateModActionParams {
    pub fn from_result(result: &ActionResult) -> Self {
        Self {
            moderator: result.moderator.clone(),
            moderator_id: result.moderator_id,
            item_id: result.item.fullname(),
            item_kind: result.item.kind.as_str().to_string(),
            subreddit: result.item.subreddit.clone(),
            author: result.item.author.clone(),
            emoji: result.emoji.clone(),
            approved: result.approved,
            actions: result.actions.clone(),
            created_at: result.created_at,
        }
    }
}
