//! Service layer.
//!
//! Pure decision logic (routing, reaction lookup, confirmation, embeds, statistics,
//! word filtering) lives next to the services that talk to Discord, Reddit and the
//! database, so the former can be tested without any I/O.
//!
//! - `routing` - Which channel an item or a result is posted to
//! - `reactions` - Which reactions an item gets and which one an emoji selects
//! - `confirmation` - When a moderator must confirm overriding another moderator
//! - `embed` - Discord embeds for items, results and command replies
//! - `word_filter` - Flagging listed words in item text
//! - `stats` - Counters derived from the action log
//! - `firestore` - Document store mirror of the action log
//! - `action_log` - Recording and exporting moderation results
//! - `moderation` - Applying a reaction through the Reddit API
//! - `mirror` - Posting items into Discord
//! - `feed` - Polling feeds and selecting items not yet mirrored

pub mod action_log;
pub mod confirmation;
pub mod embed;
pub mod feed;
pub mod firestore;
pub mod mirror;
pub mod moderation;
pub mod reactions;
pub mod routing;
pub mod stats;
pub mod word_filter;
