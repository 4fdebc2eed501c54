//! Conversion of Reddit listing JSON into `RedditItem`s.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::model::reddit::{
    ItemKind, ItemSource, ModActionDetails, RedditItem, Report, REDDIT_URL,
};

const DELETED_AUTHOR: &str = "[deleted]";

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing>,
}

#[derive(Deserialize)]
struct Thing {
    kind: String,
    data: Value,
}

#[derive(Deserialize)]
struct RawSubmission {
    id: String,
    subreddit: String,
    author: Option<String>,
    title: String,
    #[serde(default)]
    selftext: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    is_self: bool,
    permalink: String,
    #[serde(default)]
    score: Option<i64>,
    created_utc: f64,
    #[serde(default)]
    approved_by: Option<String>,
    #[serde(default)]
    banned_by: Option<Value>,
    #[serde(default)]
    removed_by_category: Option<String>,
    #[serde(default)]
    mod_reports: Vec<Vec<Value>>,
    #[serde(default)]
    user_reports: Vec<Vec<Value>>,
    #[serde(default)]
    num_reports: Option<i64>,
}

#[derive(Deserialize)]
struct RawComment {
    id: String,
    subreddit: String,
    author: Option<String>,
    body: String,
    #[serde(default)]
    link_title: Option<String>,
    permalink: String,
    #[serde(default)]
    score: Option<i64>,
    created_utc: f64,
    #[serde(default)]
    approved_by: Option<String>,
    #[serde(default)]
    banned_by: Option<Value>,
    #[serde(default)]
    removed_by_category: Option<String>,
    #[serde(default)]
    mod_reports: Vec<Vec<Value>>,
    #[serde(default)]
    user_reports: Vec<Vec<Value>>,
    #[serde(default)]
    num_reports: Option<i64>,
}

#[derive(Deserialize)]
struct RawMessage {
    id: String,
    #[serde(default)]
    subreddit: Option<String>,
    author: Option<String>,
    subject: String,
    body: String,
    created_utc: f64,
}

#[derive(Deserialize)]
struct RawModAction {
    id: String,
    subreddit: String,
    #[serde(rename = "mod")]
    moderator: String,
    action: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    target_fullname: Option<String>,
    #[serde(default)]
    target_permalink: Option<String>,
    #[serde(default)]
    target_author: Option<String>,
    #[serde(default)]
    target_title: Option<String>,
    created_utc: f64,
}

/// Converts a listing response into items read from `source`.
///
/// Things of unknown kind (e.g. `more` placeholders) are skipped.
///
/// # Returns
/// - `Ok(Vec<RedditItem>)` - Items in listing order, newest first for feeds
/// - `Err(serde_json::Error)` - Body is not a listing or a known thing is malformed
pub fn parse_listing(body: Value, source: ItemSource) -> Result<Vec<RedditItem>, serde_json::Error> {
    let listing: Listing = serde_json::from_value(body)?;

    let mut items = Vec::with_capacity(listing.data.children.len());
    for thing in listing.data.children {
        let item = match thing.kind.as_str() {
            "t3" => submission(serde_json::from_value(thing.data)?, source),
            "t1" => comment(serde_json::from_value(thing.data)?, source),
            "t4" => message(serde_json::from_value(thing.data)?, source),
            "modaction" => mod_action(serde_json::from_value(thing.data)?, source),
            other => {
                tracing::debug!("Skipping listing child of kind {}", other);
                continue;
            }
        };
        items.push(item);
    }

    Ok(items)
}

fn submission(raw: RawSubmission, source: ItemSource) -> RedditItem {
    let permalink = absolute(&raw.permalink);
    let url = raw.url.filter(|url| !raw.is_self && *url != permalink);

    RedditItem {
        id: raw.id,
        kind: ItemKind::Submission,
        source,
        subreddit: raw.subreddit,
        author: author(raw.author),
        title: Some(raw.title),
        body: raw.selftext.filter(|text| !text.is_empty()),
        url,
        permalink,
        score: raw.score,
        created: timestamp(raw.created_utc),
        approved_by: raw.approved_by,
        removed_by: remover(raw.banned_by),
        removed_by_category: raw.removed_by_category,
        reports: reports(&raw.mod_reports, &raw.user_reports),
        num_reports: raw.num_reports.unwrap_or(0),
        mod_action: None,
    }
}

fn comment(raw: RawComment, source: ItemSource) -> RedditItem {
    RedditItem {
        id: raw.id,
        kind: ItemKind::Comment,
        source,
        subreddit: raw.subreddit,
        author: author(raw.author),
        title: raw.link_title,
        body: Some(raw.body),
        url: None,
        permalink: absolute(&raw.permalink),
        score: raw.score,
        created: timestamp(raw.created_utc),
        approved_by: raw.approved_by,
        removed_by: remover(raw.banned_by),
        removed_by_category: raw.removed_by_category,
        reports: reports(&raw.mod_reports, &raw.user_reports),
        num_reports: raw.num_reports.unwrap_or(0),
        mod_action: None,
    }
}

fn message(raw: RawMessage, source: ItemSource) -> RedditItem {
    RedditItem {
        permalink: format!("{}/message/messages/{}", REDDIT_URL, raw.id),
        id: raw.id,
        kind: ItemKind::Message,
        source,
        subreddit: raw.subreddit.unwrap_or_default(),
        author: author(raw.author),
        title: Some(raw.subject),
        body: Some(raw.body),
        url: None,
        score: None,
        created: timestamp(raw.created_utc),
        approved_by: None,
        removed_by: None,
        removed_by_category: None,
        reports: Vec::new(),
        num_reports: 0,
        mod_action: None,
    }
}

fn mod_action(raw: RawModAction, source: ItemSource) -> RedditItem {
    let target_permalink = raw.target_permalink.map(|link| absolute(&link));
    let log_link = format!("{}/r/{}/about/log", REDDIT_URL, raw.subreddit);

    RedditItem {
        id: raw.id,
        kind: ItemKind::ModAction,
        source,
        subreddit: raw.subreddit,
        author: author(Some(raw.moderator.clone())),
        title: raw.target_title.clone(),
        body: raw.description.clone(),
        url: None,
        permalink: target_permalink.clone().unwrap_or(log_link),
        score: None,
        created: timestamp(raw.created_utc),
        approved_by: None,
        removed_by: None,
        removed_by_category: None,
        reports: Vec::new(),
        num_reports: 0,
        mod_action: Some(ModActionDetails {
            moderator: raw.moderator,
            action: raw.action,
            details: raw.details.filter(|d| !d.is_empty()),
            description: raw.description.filter(|d| !d.is_empty()),
            target_fullname: raw.target_fullname,
            target_permalink,
            target_author: raw.target_author.filter(|a| !a.is_empty()),
            target_title: raw.target_title.filter(|t| !t.is_empty()),
        }),
    }
}

fn author(raw: Option<String>) -> Option<String> {
    raw.filter(|name| !name.is_empty() && name != DELETED_AUTHOR)
}

/// `banned_by` is a moderator name, or `true` for removals by Reddit's filters.
fn remover(raw: Option<Value>) -> Option<String> {
    match raw? {
        Value::String(name) => Some(name),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn absolute(permalink: &str) -> String {
    if permalink.starts_with("http") {
        permalink.to_string()
    } else {
        format!("{}{}", REDDIT_URL, permalink)
    }
}

fn timestamp(created_utc: f64) -> DateTime<Utc> {
    let secs = created_utc.trunc() as i64;
    let nanos = (created_utc.fract() * 1e9) as u32;
    DateTime::from_timestamp(secs, nanos).unwrap_or_default()
}

/// Mod reports are `[reason, moderator]`, user reports `[reason, count, ...]`.
fn reports(mod_reports: &[Vec<Value>], user_reports: &[Vec<Value>]) -> Vec<Report> {
    let reason = |entry: &[Value]| {
        entry
            .first()
            .and_then(Value::as_str)
            .unwrap_or("no reason")
            .to_string()
    };

    let mods = mod_reports.iter().map(|entry| Report {
        reason: reason(entry),
        reporter: entry.get(1).and_then(Value::as_str).map(str::to_string),
        count: 1,
    });
    let users = user_reports.iter().map(|entry| Report {
        reason: reason(entry),
        reporter: None,
        count: entry.get(1).and_then(Value::as_i64).unwrap_or(1),
    });

    mods.chain(users).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Wraps things into a listing body.
    pub(crate) fn listing(children: Vec<Value>) -> Value {
        json!({"kind": "Listing", "data": {"after": null, "children": children}})
    }

    pub(crate) fn t3(id: &str) -> Value {
        json!({"kind": "t3", "data": {
            "id": id,
            "subreddit": "gtaonline",
            "author": "PlayerOne",
            "title": "Heist crew wanted",
            "selftext": "Looking for two more players.",
            "url": format!("https://www.reddit.com/r/gtaonline/comments/{}/heist_crew_wanted/", id),
            "is_self": true,
            "permalink": format!("/r/gtaonline/comments/{}/heist_crew_wanted/", id),
            "score": 12,
            "created_utc": 1595000000.0,
            "approved_by": null,
            "banned_by": null,
            "mod_reports": [],
            "user_reports": [],
            "num_reports": 0
        }})
    }

    pub(crate) fn t1(id: &str) -> Value {
        json!({"kind": "t1", "data": {
            "id": id,
            "subreddit": "gtaonline",
            "author": "PlayerTwo",
            "body": "Count me in",
            "link_title": "Heist crew wanted",
            "permalink": format!("/r/gtaonline/comments/post1/heist_crew_wanted/{}/", id),
            "score": 3,
            "created_utc": 1595000100.0
        }})
    }

    #[test]
    fn parses_submission() {
        let items = parse_listing(listing(vec![t3("abc")]), ItemSource::New).unwrap();

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.kind, ItemKind::Submission);
        assert_eq!(item.fullname(), "t3_abc");
        assert_eq!(item.source, ItemSource::New);
        assert_eq!(item.author.as_deref(), Some("PlayerOne"));
        assert_eq!(
            item.permalink,
            "https://www.reddit.com/r/gtaonline/comments/abc/heist_crew_wanted/"
        );
        assert_eq!(item.url, None);
        assert_eq!(item.created.timestamp(), 1595000000);
    }

    #[test]
    fn parses_reported_comment() {
        let mut thing = t1("def");
        thing["data"]["mod_reports"] = json!([["Rule 3", "SomeMod"]]);
        thing["data"]["user_reports"] = json!([["Spam", 2, false, false]]);
        thing["data"]["num_reports"] = json!(3);
        thing["data"]["author"] = json!("[deleted]");
        let items = parse_listing(listing(vec![thing]), ItemSource::Reports).unwrap();

        let item = &items[0];
        assert_eq!(item.kind, ItemKind::Comment);
        assert_eq!(item.author, None);
        assert_eq!(item.num_reports, 3);
        assert_eq!(
            item.reports,
            vec![
                Report {
                    reason: "Rule 3".to_string(),
                    reporter: Some("SomeMod".to_string()),
                    count: 1,
                },
                Report {
                    reason: "Spam".to_string(),
                    reporter: None,
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn parses_message_and_mod_action() {
        let body = listing(vec![
            json!({"kind": "t4", "data": {
                "id": "m1",
                "subreddit": "gtaonline",
                "author": "PlayerThree",
                "subject": "Ban appeal",
                "body": "Please unban me",
                "created_utc": 1595000200.0
            }}),
            json!({"kind": "modaction", "data": {
                "id": "ModAction_1",
                "subreddit": "gtaonline",
                "mod": "SomeMod",
                "action": "removecomment",
                "details": "",
                "description": null,
                "target_fullname": "t1_def",
                "target_permalink": "/r/gtaonline/comments/post1/heist_crew_wanted/def/",
                "target_author": "PlayerTwo",
                "target_title": null,
                "created_utc": 1595000300
            }}),
            json!({"kind": "more", "data": {}}),
        ]);

        let items = parse_listing(body, ItemSource::Mail).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ItemKind::Message);
        assert_eq!(
            items[0].permalink,
            "https://www.reddit.com/message/messages/m1"
        );

        let action = items[1].mod_action.as_ref().unwrap();
        assert_eq!(action.moderator, "SomeMod");
        assert_eq!(action.action, "removecomment");
        assert_eq!(action.details, None);
        assert_eq!(
            action.target_permalink.as_deref(),
            Some("https://www.reddit.com/r/gtaonline/comments/post1/heist_crew_wanted/def/")
        );
    }

    #[test]
    fn moderator_removal_is_recorded() {
        let mut thing = t3("abc");
        thing["data"]["banned_by"] = json!("SomeMod");
        thing["data"]["removed_by_category"] = json!("moderator");
        let items = parse_listing(listing(vec![thing]), ItemSource::Lookup).unwrap();

        assert_eq!(items[0].removed_by.as_deref(), Some("SomeMod"));
        assert_eq!(items[0].removed_by_category.as_deref(), Some("moderator"));
    }

    #[test]
    fn rejects_non_listing_body() {
        assert!(parse_listing(json!({"error": 404}), ItemSource::New).is_err());
    }
}
