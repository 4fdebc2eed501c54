//! Settings file models.
//!
//! The settings file holds everything that is not a secret: subreddits and their
//! reactions, the channel routing table, and cosmetic options. Loading and
//! validation live in `crate::config`.

use serde::{Deserialize, Serialize};

use crate::model::{
    reaction::{default_reactions, ReactionConfig},
    reddit::ItemSource,
};

/// Discord channels mirrored items and moderation results are posted to.
///
/// A missing channel disables mirroring of that category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSettings {
    #[serde(default)]
    pub new: Option<u64>,
    #[serde(default)]
    pub comments: Option<u64>,
    #[serde(default)]
    pub mail: Option<u64>,
    #[serde(default)]
    pub queue: Option<u64>,
    #[serde(default)]
    pub reports: Option<u64>,
    #[serde(default)]
    pub actions: Option<u64>,
    #[serde(default)]
    pub approved: Option<u64>,
    #[serde(default)]
    pub removed: Option<u64>,
}

/// Info message edited with the reactions embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionsMessage {
    pub channel_id: u64,
    pub message_id: u64,
}

/// How dirty words are matched against text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordMatch {
    /// A word matches anywhere, including inside longer words.
    Substring,
    #[default]
    WholeWord,
}

fn default_true() -> bool {
    true
}

/// A moderated subreddit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubredditSettings {
    pub name: String,
    #[serde(default = "default_true")]
    pub stream_new: bool,
    #[serde(default = "default_true")]
    pub stream_comments: bool,
    #[serde(default = "default_true")]
    pub stream_reports: bool,
    #[serde(default)]
    pub stream_queue: bool,
    #[serde(default = "default_true")]
    pub stream_mail: bool,
    #[serde(default = "default_true")]
    pub stream_mod_actions: bool,
    #[serde(default = "default_reactions")]
    pub reactions: Vec<ReactionConfig>,
}

impl SubredditSettings {
    /// Whether the given feed is polled for this subreddit.
    pub fn streams(&self, source: ItemSource) -> bool {
        match source {
            ItemSource::New => self.stream_new,
            ItemSource::Comments => self.stream_comments,
            ItemSource::Reports => self.stream_reports,
            ItemSource::Queue => self.stream_queue,
            ItemSource::Mail => self.stream_mail,
            ItemSource::ModActions => self.stream_mod_actions,
            ItemSource::Lookup => false,
        }
    }

    /// Feeds polled for this subreddit, in a stable order.
    pub fn enabled_sources(&self) -> Vec<ItemSource> {
        ItemSource::FEEDS
            .into_iter()
            .filter(|source| self.streams(*source))
            .collect()
    }
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_color() -> u32 {
    // rgb(207, 226, 206)
    0xCFE2CE
}

fn default_footer() -> String {
    "Lester Crest Bot".to_string()
}

fn default_ignored_authors() -> Vec<String> {
    vec!["automoderator".to_string()]
}

fn default_poll_interval() -> u64 {
    30
}

/// Contents of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSettings {
    #[serde(default = "default_prefix")]
    pub command_prefix: String,
    #[serde(default = "default_true")]
    pub change_presence: bool,
    #[serde(default = "default_color")]
    pub embed_color: u32,
    #[serde(default = "default_footer")]
    pub footer_text: String,
    #[serde(default)]
    pub moderator_role_id: Option<u64>,
    #[serde(default = "default_ignored_authors")]
    pub ignored_comment_authors: Vec<String>,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    #[serde(default)]
    pub channels: ChannelSettings,
    #[serde(default)]
    pub reactions_message: Option<ReactionsMessage>,
    #[serde(default)]
    pub word_list: Option<String>,
    #[serde(default)]
    pub word_match: WordMatch,
    pub subreddits: Vec<SubredditSettings>,
}

impl BotSettings {
    /// Looks up a configured subreddit, ignoring case.
    pub fn subreddit(&self, name: &str) -> Option<&SubredditSettings> {
        self.subreddits
            .iter()
            .find(|sub| sub.name.eq_ignore_ascii_case(name))
    }

    /// Whether comments by `author` are skipped when mirroring.
    pub fn ignores_comment_author(&self, author: &str) -> bool {
        self.ignored_comment_authors
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_settings_use_defaults() {
        let settings: BotSettings =
            serde_json::from_str(r#"{"subreddits": [{"name": "gtaonline"}]}"#).unwrap();

        assert_eq!(settings.command_prefix, "!");
        assert_eq!(settings.embed_color, 0xCFE2CE);
        assert_eq!(settings.poll_interval_seconds, 30);
        assert_eq!(settings.word_match, WordMatch::WholeWord);
        assert!(settings.channels.new.is_none());

        let sub = &settings.subreddits[0];
        assert!(sub.stream_new);
        assert!(!sub.stream_queue);
        assert_eq!(sub.reactions, default_reactions());
    }

    #[test]
    fn enabled_sources_follow_stream_flags() {
        let sub: SubredditSettings = serde_json::from_str(
            r#"{"name": "gtaonline", "stream_comments": false, "stream_mail": false}"#,
        )
        .unwrap();

        assert_eq!(
            sub.enabled_sources(),
            vec![ItemSource::New, ItemSource::Reports, ItemSource::ModActions]
        );
    }

    #[test]
    fn subreddit_lookup_ignores_case() {
        let settings: BotSettings =
            serde_json::from_str(r#"{"subreddits": [{"name": "GTAOnline"}]}"#).unwrap();

        assert!(settings.subreddit("gtaonline").is_some());
        assert!(settings.subreddit("gta").is_none());
        assert!(settings.ignores_comment_author("AutoModerator"));
    }
}
