//! Thin Reddit API client.
//!
//! Covers exactly what the bot needs: OAuth for a script application, polling the
//! moderation listings of a subreddit, looking up single items from links, and the
//! moderation endpoints reactions map to.
//!
//! - `client` - Authentication, request execution and response decoding
//! - `rate_limit` - Bookkeeping of Reddit's `x-ratelimit-*` headers
//! - `listing` - Conversion of listing JSON into `RedditItem`s
//! - `url` - Finding item references in free text
//! - `feed` - Feed polling and single item lookup
//! - `moderation` - Approve, remove, lock, reply, mark read and ban

pub mod client;
pub mod feed;
pub mod listing;
pub mod moderation;
pub mod rate_limit;
pub mod url;

pub use client::RedditClient;
