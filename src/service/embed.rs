//! Discord embeds for mirrored items, moderation results and command replies.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};

use crate::model::{
    reaction::ActionResult,
    reddit::{ItemKind, ItemSource, RedditItem, REDDIT_URL},
    settings::BotSettings,
    stats::ModStats,
};

const TITLE_LIMIT: usize = 256;
const DESCRIPTION_LIMIT: usize = 4096;
const FIELD_LIMIT: usize = 1024;
const MAX_FIELDS: usize = 25;
/// Discord's limit on title, description, field, footer and author text combined.
const EMBED_LIMIT: usize = 6000;

/// Shared look of every embed the bot posts.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedTemplate {
    pub color: u32,
    pub footer_text: String,
    /// Bot avatar, known once the gateway is ready.
    pub footer_icon: Option<String>,
}

impl EmbedTemplate {
    pub fn from_settings(settings: &BotSettings, footer_icon: Option<String>) -> Self {
        Self {
            color: settings.embed_color,
            footer_text: settings.footer_text.clone(),
            footer_icon,
        }
    }

    /// Empty embed with colour, footer and the current time.
    pub fn base(&self) -> CreateEmbed {
        let mut footer = CreateEmbedFooter::new(&self.footer_text);
        if let Some(icon) = &self.footer_icon {
            footer = footer.icon_url(icon);
        }

        CreateEmbed::new()
            .color(self.color)
            .footer(footer)
            .timestamp(Timestamp::now())
    }
}

/// Shortens `text` to at most `limit` characters, marking the cut with `…`.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(limit.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

fn item_title(item: &RedditItem) -> String {
    match item.kind {
        ItemKind::Message => return "Modmail".to_string(),
        ItemKind::ModAction => return "Mod action".to_string(),
        ItemKind::Submission | ItemKind::Comment => {}
    }

    match item.source {
        ItemSource::Reports => format!("Reported {}", item.kind),
        ItemSource::Queue => format!("{} in mod queue", capitalized(item.kind)),
        ItemSource::Lookup => capitalized(item.kind),
        _ => format!("New {}", item.kind),
    }
}

fn author_label(name: Option<&str>) -> String {
    format!("/u/{}", name.unwrap_or("[deleted]"))
}

fn author(name: Option<&str>) -> CreateEmbedAuthor {
    let embed_author = CreateEmbedAuthor::new(author_label(name));
    match name {
        Some(name) => embed_author.url(format!("{}/user/{}", REDDIT_URL, name)),
        None => embed_author,
    }
}

/// Embed a Reddit item is mirrored as.
///
/// The embed URL is the item's permalink; reactions on the mirror message find
/// the item again through it. Mod log entries carry no URL and get no reactions.
///
/// # Arguments
/// - `template` - Shared colour and footer
/// - `item` - Item to render
/// - `flagged` - Listed words found in the item's text
pub fn item_embed(template: &EmbedTemplate, item: &RedditItem, flagged: &[String]) -> CreateEmbed {
    if let Some(action) = &item.mod_action {
        let mut lines = vec![format!("/u/{} {}", action.moderator, action.action)];
        if let Some(details) = &action.details {
            lines.push(details.clone());
        }
        if let Some(description) = &action.description {
            lines.push(description.clone());
        }
        if let Some(link) = &action.target_permalink {
            let label = action
                .target_title
                .clone()
                .or_else(|| action.target_fullname.clone())
                .unwrap_or_else(|| "Target".to_string());
            let by = action
                .target_author
                .as_ref()
                .map(|author| format!(" by /u/{}", author))
                .unwrap_or_default();
            lines.push(format!("[{}]({}){}", label, link, by));
        }

        return template
            .base()
            .title("Mod action")
            .author(author(Some(&action.moderator)))
            .description(truncate(&lines.join("\n"), DESCRIPTION_LIMIT));
    }

    let mut text = match (&item.title, &item.body) {
        (Some(title), Some(body)) if item.kind != ItemKind::Comment => {
            format!("**{}**\n\n{}", title, body)
        }
        (Some(title), None) if item.kind != ItemKind::Comment => format!("**{}**", title),
        (_, Some(body)) => body.clone(),
        _ => String::new(),
    };
    if let Some(url) = &item.url {
        text.push_str(&format!("\n\n{}", url));
    }

    let reported = item.source == ItemSource::Reports
        && matches!(item.kind, ItemKind::Submission | ItemKind::Comment);

    let mut fields: Vec<(&str, String)> = Vec::new();
    if reported && !item.reports.is_empty() {
        let reports: Vec<String> = item
            .reports
            .iter()
            .map(|report| match &report.reporter {
                Some(moderator) => format!("{} (/u/{})", report.reason, moderator),
                None => format!("{}: {}", report.count, report.reason),
            })
            .collect();
        fields.push(("Reports", truncate(&reports.join("\n"), FIELD_LIMIT)));
    }
    if !flagged.is_empty() {
        fields.push(("Flagged words", truncate(&flagged.join(", "), FIELD_LIMIT)));
    }

    let title = truncate(&item_title(item), TITLE_LIMIT);
    let used = title.chars().count()
        + author_label(item.author.as_deref()).chars().count()
        + template.footer_text.chars().count()
        + fields
            .iter()
            .map(|(name, value)| name.chars().count() + value.chars().count())
            .sum::<usize>();
    let budget = DESCRIPTION_LIMIT.min(EMBED_LIMIT.saturating_sub(used));

    let score = if reported {
        format!("\nScore: `{}`", item.score.unwrap_or(0))
    } else {
        String::new()
    };
    let description = format!(
        "{}{}",
        truncate(text.trim(), budget.saturating_sub(score.chars().count())),
        score
    );

    let embed = template
        .base()
        .title(title)
        .url(&item.permalink)
        .author(author(item.author.as_deref()))
        .description(description);

    fields
        .into_iter()
        .fold(embed, |embed, (name, value)| embed.field(name, value, false))
}

fn capitalized(kind: ItemKind) -> String {
    let name = kind.as_str();
    format!("{}{}", name[..1].to_uppercase(), &name[1..])
}

/// Embed posted to the approved or removed channel after a reaction was applied.
pub fn result_embed(template: &EmbedTemplate, result: &ActionResult) -> CreateEmbed {
    let item = &result.item;
    let outcome = if result.approved { "approved" } else { "removed" };

    template
        .base()
        .title(format!("{} {}", capitalized(item.kind), outcome))
        .url(&item.permalink)
        .description(truncate(
            &format!(
                "The {} by /u/{} was {} by {}.\n\n{}",
                item.kind,
                item.author_name(),
                result.actions_text(),
                result.moderator,
                item.permalink
            ),
            DESCRIPTION_LIMIT,
        ))
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Submission => "Submissions",
        ItemKind::Comment => "Comments",
        ItemKind::Message => "Modmail",
        ItemKind::ModAction => "Mod actions",
    }
}

/// Embed listing every subreddit's reactions, grouped by item kind.
pub fn reactions_embed(template: &EmbedTemplate, settings: &BotSettings) -> CreateEmbed {
    let mut embed = template.base().title("Reactions");

    for sub in settings.subreddits.iter().take(MAX_FIELDS) {
        let mut sections = Vec::new();
        for kind in [ItemKind::Submission, ItemKind::Comment, ItemKind::Message] {
            let lines: Vec<String> = sub
                .reactions
                .iter()
                .filter(|reaction| reaction.applies_to(kind))
                .map(|reaction| format!("{} - {}", reaction.emoji, reaction.summary()))
                .collect();
            if !lines.is_empty() {
                sections.push(format!("**{}**\n{}", kind_label(kind), lines.join("\n")));
            }
        }

        let value = if sections.is_empty() {
            "No reactions configured.".to_string()
        } else {
            sections.join("\n\n")
        };
        embed = embed.field(format!("r/{}", sub.name), truncate(&value, FIELD_LIMIT), false);
    }

    embed
}

/// Embed listing the subreddits and the feeds polled for each.
pub fn subreddits_embed(template: &EmbedTemplate, settings: &BotSettings) -> CreateEmbed {
    let mut embed = template.base().title("Subreddits");

    for sub in settings.subreddits.iter().take(MAX_FIELDS) {
        let sources: Vec<&str> = sub
            .enabled_sources()
            .iter()
            .map(|source| source.as_str())
            .collect();
        let value = if sources.is_empty() {
            "No feeds enabled.".to_string()
        } else {
            sources.join(", ")
        };
        embed = embed.field(format!("r/{}", sub.name), value, false);
    }

    embed
}

/// Embed summarising the action log.
pub fn stats_embed(template: &EmbedTemplate, stats: &ModStats) -> CreateEmbed {
    let ranking = |counts: &[(String, u64)]| {
        if counts.is_empty() {
            return "None yet.".to_string();
        }
        let lines: Vec<String> = counts
            .iter()
            .take(10)
            .map(|(name, count)| format!("{} - {}", name, count))
            .collect();
        truncate(&lines.join("\n"), FIELD_LIMIT)
    };

    template
        .base()
        .title("Moderation stats")
        .description(format!(
            "{} mod actions: {} approved, {} removed.",
            stats.total, stats.approved, stats.removed
        ))
        .field("Moderators", ranking(&stats.by_moderator), true)
        .field("Actions", ranking(&stats.by_action), true)
}

/// Embed listing the prefix commands.
pub fn help_embed(template: &EmbedTemplate, prefix: &str) -> CreateEmbed {
    let commands = [
        ("help", "Show this message."),
        (
            "reload",
            "Reload all the reactions for the subreddits configured and update the info embed.",
        ),
        ("subreddits", "List the subreddits and the feeds mirrored for each."),
        ("reactions", "List the reactions available on mirrored items."),
        ("stats", "Show moderation statistics from the action log."),
    ];

    let lines: Vec<String> = commands
        .iter()
        .map(|(name, help)| format!("`{}{}` {}", prefix, name, help))
        .collect();

    template
        .base()
        .title("Commands")
        .description(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reddit::{
        tests::{comment, submission},
        ModActionDetails, Report,
    };
    use chrono::Utc;
    use serde_json::Value;

    fn template() -> EmbedTemplate {
        EmbedTemplate {
            color: 0xCFE2CE,
            footer_text: "Lester Crest Bot".to_string(),
            footer_icon: Some("https://cdn.discordapp.com/avatars/1/a.png".to_string()),
        }
    }

    fn json(embed: CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn template_sets_colour_and_footer() {
        let embed = json(template().base());

        assert_eq!(embed["color"], 0xCFE2CE);
        assert_eq!(embed["footer"]["text"], "Lester Crest Bot");
        assert_eq!(
            embed["footer"]["icon_url"],
            "https://cdn.discordapp.com/avatars/1/a.png"
        );
        assert!(embed["timestamp"].is_string());
    }

    #[test]
    fn item_embed_links_to_permalink() {
        let item = submission("abc", ItemSource::New);

        let embed = json(item_embed(&template(), &item, &[]));

        assert_eq!(embed["title"], "New submission");
        assert_eq!(embed["url"], item.permalink.as_str());
        assert_eq!(embed["author"]["name"], "/u/PlayerOne");
        assert_eq!(
            embed["description"],
            "**Heist crew wanted**\n\nLooking for two more players."
        );
    }

    #[test]
    fn reported_items_show_score_and_reports() {
        let mut item = comment("def", ItemSource::Reports);
        item.score = Some(-4);
        item.reports = vec![Report {
            reason: "Spam".to_string(),
            reporter: None,
            count: 2,
        }];

        let embed = json(item_embed(&template(), &item, &["heist".to_string()]));

        assert_eq!(embed["title"], "Reported comment");
        assert_eq!(embed["description"], "Count me in\nScore: `-4`");
        assert_eq!(embed["fields"][0]["name"], "Reports");
        assert_eq!(embed["fields"][0]["value"], "2: Spam");
        assert_eq!(embed["fields"][1]["name"], "Flagged words");
        assert_eq!(embed["fields"][1]["value"], "heist");
    }

    #[test]
    fn long_text_is_truncated_with_score_kept() {
        let mut item = submission("abc", ItemSource::Reports);
        item.body = Some("x".repeat(5000));

        let embed = json(item_embed(&template(), &item, &[]));
        let description = embed["description"].as_str().unwrap();

        assert_eq!(description.chars().count(), DESCRIPTION_LIMIT);
        assert!(description.ends_with("Score: `12`"));
    }

    #[test]
    fn full_item_embed_stays_within_total_limit() {
        let mut item = submission("abc", ItemSource::Reports);
        item.body = Some("x".repeat(5000));
        item.reports = (0..60)
            .map(|i| Report {
                reason: format!("Breaks rule {} about heist crews", i),
                reporter: None,
                count: 1,
            })
            .collect();
        let flagged: Vec<String> = (0..200).map(|i| format!("word{}", i)).collect();

        let embed = json(item_embed(&template(), &item, &flagged));

        let chars = |value: &Value| value.as_str().map_or(0, |s| s.chars().count());
        let fields: usize = embed["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|field| chars(&field["name"]) + chars(&field["value"]))
            .sum();
        let total = chars(&embed["title"])
            + chars(&embed["description"])
            + chars(&embed["footer"]["text"])
            + chars(&embed["author"]["name"])
            + fields;

        assert!(total <= EMBED_LIMIT, "{} characters", total);
        assert!(embed["description"]
            .as_str()
            .unwrap()
            .ends_with("Score: `12`"));
        assert_eq!(chars(&embed["fields"][0]["value"]), FIELD_LIMIT);
    }

    #[test]
    fn mod_action_embed_has_no_url() {
        let mut item = submission("ModAction_1", ItemSource::ModActions);
        item.kind = ItemKind::ModAction;
        item.mod_action = Some(ModActionDetails {
            moderator: "SomeMod".to_string(),
            action: "removelink".to_string(),
            target_permalink: Some("https://www.reddit.com/r/gtaonline/comments/abc/".to_string()),
            target_author: Some("PlayerOne".to_string()),
            target_title: Some("Heist crew wanted".to_string()),
            ..Default::default()
        });

        let embed = json(item_embed(&template(), &item, &[]));

        assert_eq!(embed["title"], "Mod action");
        assert!(embed.get("url").map_or(true, Value::is_null));
        assert_eq!(
            embed["description"],
            "/u/SomeMod removelink\n[Heist crew wanted](https://www.reddit.com/r/gtaonline/comments/abc/) by /u/PlayerOne"
        );
    }

    #[test]
    fn result_embed_describes_outcome() {
        let result = ActionResult {
            item: comment("def", ItemSource::Comments),
            emoji: "💣".to_string(),
            approved: false,
            actions: vec!["removed as spam".to_string(), "locked".to_string()],
            moderator: "Lester".to_string(),
            moderator_id: 1,
            created_at: Utc::now(),
        };

        let embed = json(result_embed(&template(), &result));

        assert_eq!(embed["title"], "Comment removed");
        assert!(embed["description"]
            .as_str()
            .unwrap()
            .starts_with("The comment by /u/PlayerOne was removed as spam and locked by Lester."));
    }

    #[test]
    fn reactions_embed_groups_by_kind() {
        let settings: BotSettings =
            serde_json::from_str(r#"{"subreddits": [{"name": "gtaonline"}]}"#).unwrap();

        let embed = json(reactions_embed(&template(), &settings));

        assert_eq!(embed["fields"][0]["name"], "r/gtaonline");
        let value = embed["fields"][0]["value"].as_str().unwrap();
        assert!(value.starts_with("**Submissions**\n✔ - Approve\n❌ - Remove"));
        assert!(value.contains("**Modmail**\n✉ - Mark as read"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 10), "héllo");
        assert_eq!(truncate("héllo", 3), "hé…");
    }
}
