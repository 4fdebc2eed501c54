//! Domain models for Reddit items mirrored into Discord.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL used to build human-facing links.
pub const REDDIT_URL: &str = "https://www.reddit.com";

/// Kind of a Reddit item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Submission,
    Comment,
    Message,
    ModAction,
}

impl ItemKind {
    /// Type prefix Reddit uses for fullnames of this kind.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Submission => Some("t3"),
            Self::Comment => Some("t1"),
            Self::Message => Some("t4"),
            Self::ModAction => None,
        }
    }

    /// Lowercase name used in embeds and in the action log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Comment => "comment",
            Self::Message => "message",
            Self::ModAction => "mod action",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feed an item was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    New,
    Comments,
    Reports,
    Queue,
    Mail,
    ModActions,
    /// Fetched on demand from a link posted in Discord.
    Lookup,
}

impl ItemSource {
    /// Sources that are polled from Reddit.
    pub const FEEDS: [ItemSource; 6] = [
        Self::New,
        Self::Comments,
        Self::Reports,
        Self::Queue,
        Self::Mail,
        Self::ModActions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Comments => "comments",
            Self::Reports => "reports",
            Self::Queue => "queue",
            Self::Mail => "mail",
            Self::ModActions => "mod_actions",
            Self::Lookup => "lookup",
        }
    }
}

impl fmt::Display for ItemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A report attached to a submission or comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub reason: String,
    /// Moderator name for mod reports, `None` for anonymous user reports.
    pub reporter: Option<String>,
    pub count: i64,
}

/// Details of a mod log entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModActionDetails {
    pub moderator: String,
    pub action: String,
    pub details: Option<String>,
    pub description: Option<String>,
    pub target_fullname: Option<String>,
    pub target_permalink: Option<String>,
    pub target_author: Option<String>,
    pub target_title: Option<String>,
}

/// A Reddit submission, comment, modmail message or mod log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RedditItem {
    /// Base36 id without the type prefix.
    pub id: String,
    pub kind: ItemKind,
    pub source: ItemSource,
    pub subreddit: String,
    /// `None` when the account was deleted.
    pub author: Option<String>,
    /// Submission title or message subject.
    pub title: Option<String>,
    /// Self text, comment body or message body.
    pub body: Option<String>,
    /// Outbound link of link submissions.
    pub url: Option<String>,
    /// Absolute link to the item on reddit.com.
    pub permalink: String,
    pub score: Option<i64>,
    pub created: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub removed_by: Option<String>,
    pub removed_by_category: Option<String>,
    pub reports: Vec<Report>,
    pub num_reports: i64,
    pub mod_action: Option<ModActionDetails>,
}

impl RedditItem {
    /// Typed Reddit id, e.g. `t3_abc123`. Mod log entries use their raw id.
    pub fn fullname(&self) -> String {
        match self.kind.prefix() {
            Some(prefix) => format!("{}_{}", prefix, self.id),
            None => self.id.clone(),
        }
    }

    /// Author name for display, `[deleted]` when unknown.
    pub fn author_name(&self) -> &str {
        self.author.as_deref().unwrap_or("[deleted]")
    }

    /// Whether the author matches `name`, ignoring case.
    pub fn is_authored_by(&self, name: &str) -> bool {
        self.author
            .as_deref()
            .map(|author| author.eq_ignore_ascii_case(name))
            .unwrap_or(false)
    }

    /// Key under which this item is remembered as mirrored for its feed.
    ///
    /// Reports and the mod queue include the report count so that new reports on an
    /// already mirrored item surface it again.
    pub fn seen_key(&self) -> String {
        match self.source {
            ItemSource::Reports | ItemSource::Queue => {
                format!("{}:{}", self.fullname(), self.num_reports)
            }
            _ => self.fullname(),
        }
    }
}

/// Reference to a Reddit item found in a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: String,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn fullname(&self) -> String {
        match self.kind.prefix() {
            Some(prefix) => format!("{}_{}", prefix, self.id),
            None => self.id.clone(),
        }
    }
}
