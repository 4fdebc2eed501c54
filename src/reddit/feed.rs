//! Feed polling and single item lookup.

use crate::{
    error::reddit::RedditError,
    model::reddit::{ItemKind, ItemRef, ItemSource, RedditItem},
    reddit::{listing::parse_listing, RedditClient},
};

/// Number of items requested per feed poll.
pub const DEFAULT_LIMIT: u32 = 25;

/// API path of a subreddit feed. `Lookup` has no feed.
pub fn feed_path(subreddit: &str, source: ItemSource) -> Option<String> {
    let suffix = match source {
        ItemSource::New => "new",
        ItemSource::Comments => "comments",
        ItemSource::Reports => "about/reports",
        ItemSource::Queue => "about/modqueue",
        ItemSource::Mail => "about/message/inbox",
        ItemSource::ModActions => "about/log",
        ItemSource::Lookup => return None,
    };

    Some(format!("/r/{}/{}", subreddit, suffix))
}

impl RedditClient {
    /// Fetches the latest items of a subreddit feed, newest first.
    ///
    /// # Arguments
    /// - `subreddit` - Subreddit name without the `r/` prefix
    /// - `source` - Feed to read
    /// - `limit` - Maximum number of items
    ///
    /// # Returns
    /// - `Ok(Vec<RedditItem>)` - Items tagged with `source`; empty for `Lookup`
    /// - `Err(RedditError)` - Request or decoding failed
    pub async fn fetch(
        &self,
        subreddit: &str,
        source: ItemSource,
        limit: u32,
    ) -> Result<Vec<RedditItem>, RedditError> {
        let Some(path) = feed_path(subreddit, source) else {
            return Ok(Vec::new());
        };

        let limit = limit.to_string();
        let body: serde_json::Value = self.get(&path, &[("limit", limit.as_str())]).await?;
        let mut items = decode_listing(&path, body, source)?;

        // Modmail in a subreddit inbox may omit the subreddit name.
        for item in items.iter_mut().filter(|item| item.subreddit.is_empty()) {
            item.subreddit = subreddit.to_string();
        }

        Ok(items)
    }

    /// Fetches a single item from a reference found in a link.
    ///
    /// # Returns
    /// - `Ok(Some(RedditItem))` - Item tagged as `ItemSource::Lookup`
    /// - `Ok(None)` - Reddit returned no such item
    /// - `Err(RedditError)` - Request or decoding failed
    pub async fn fetch_item(&self, item: &ItemRef) -> Result<Option<RedditItem>, RedditError> {
        let (path, body): (String, serde_json::Value) = match item.kind {
            ItemKind::Message => {
                let path = format!("/message/messages/{}", item.id);
                let body = self.get(&path, &[]).await?;
                (path, body)
            }
            ItemKind::Submission | ItemKind::Comment => {
                let path = "/api/info".to_string();
                let fullname = item.fullname();
                let body = self.get(&path, &[("id", fullname.as_str())]).await?;
                (path, body)
            }
            ItemKind::ModAction => return Ok(None),
        };

        let items = decode_listing(&path, body, ItemSource::Lookup)?;

        Ok(items
            .into_iter()
            .find(|found| found.kind == item.kind && found.id == item.id))
    }
}

fn decode_listing(
    path: &str,
    body: serde_json::Value,
    source: ItemSource,
) -> Result<Vec<RedditItem>, RedditError> {
    parse_listing(body, source).map_err(|source| RedditError::Decode {
        path: path.to_string(),
        source,
    })
}
