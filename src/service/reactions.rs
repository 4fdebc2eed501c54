//! Reaction lookup per item.

use serenity::all::ReactionType;

use crate::{
    error::internal::InternalError,
    model::{
        reaction::ReactionConfig,
        reddit::{ItemKind, RedditItem},
        settings::BotSettings,
    },
};

/// Emoji presentation selector Discord may append to unicode emoji.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Reactions offered on an item, in configured order.
///
/// Mod log entries and items of unconfigured subreddits get none.
pub fn reactions_for<'a>(settings: &'a BotSettings, item: &RedditItem) -> Vec<&'a ReactionConfig> {
    if item.kind == ItemKind::ModAction {
        return Vec::new();
    }

    settings
        .subreddit(&item.subreddit)
        .map(|sub| {
            sub.reactions
                .iter()
                .filter(|reaction| reaction.applies_to(item.kind))
                .collect()
        })
        .unwrap_or_default()
}

/// Reaction selected by `emoji` on an item.
///
/// Unicode emoji compare equal with or without the presentation selector, so a
/// configured `✔` matches the `✔️` Discord reports back.
pub fn lookup<'a>(
    settings: &'a BotSettings,
    item: &RedditItem,
    emoji: &str,
) -> Option<&'a ReactionConfig> {
    let emoji = normalize(emoji);

    reactions_for(settings, item)
        .into_iter()
        .find(|reaction| normalize(&reaction.emoji) == emoji)
}

fn normalize(emoji: &str) -> String {
    emoji.chars().filter(|c| *c != VARIATION_SELECTOR).collect()
}

/// String form of a Discord reaction: unicode as-is, custom emoji as `<:name:id>`.
pub fn emoji_key(reaction: &ReactionType) -> Option<String> {
    match reaction {
        ReactionType::Unicode(emoji) => Some(emoji.clone()),
        ReactionType::Custom {
            animated,
            id,
            name,
        } => {
            let name = name.as_deref().unwrap_or("_");
            Some(if *animated {
                format!("<a:{}:{}>", name, id)
            } else {
                format!("<:{}:{}>", name, id)
            })
        }
        _ => None,
    }
}

/// Parses a configured emoji string into a reaction Discord accepts.
pub fn reaction_type(emoji: &str) -> Result<ReactionType, InternalError> {
    ReactionType::try_from(emoji).map_err(|_| InternalError::InvalidEmoji(emoji.to_string()))
}
