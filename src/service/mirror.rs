//! Posting Reddit items into Discord.

use serenity::{
    all::{ChannelId, CreateMessage, Message},
    http::Http,
};

use crate::{
    error::AppError,
    model::{
        reaction::ReactionConfig,
        reddit::{ItemKind, RedditItem},
        settings::BotSettings,
    },
    service::{
        embed::{item_embed, EmbedTemplate},
        reactions::{reaction_type, reactions_for},
        routing::channel_for,
        word_filter::WordFilter,
    },
};

/// Whether a feed item is posted at all.
///
/// Comments by ignored authors (AutoModerator and the bot's own account) are not.
pub fn should_mirror(settings: &BotSettings, item: &RedditItem) -> bool {
    match (item.kind, item.author.as_deref()) {
        (ItemKind::Comment, Some(author)) => !settings.ignores_comment_author(author),
        _ => true,
    }
}

/// Listed words found in an item's title and body.
pub fn flagged_words(filter: Option<&WordFilter>, item: &RedditItem) -> Vec<String> {
    let Some(filter) = filter else {
        return Vec::new();
    };
    if item.kind == ItemKind::ModAction {
        return Vec::new();
    }

    let text = [item.title.as_deref(), item.body.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n");
    filter.matches(&text)
}

/// Adds reactions to a message in order.
///
/// A reaction Discord rejects is logged and skipped so the remaining ones are
/// still added.
pub async fn add_reactions(http: &Http, message: &Message, reactions: &[&ReactionConfig]) {
    for reaction in reactions {
        let emoji = match reaction_type(&reaction.emoji) {
            Ok(emoji) => emoji,
            Err(e) => {
                tracing::warn!("Skipping reaction: {}", e);
                continue;
            }
        };

        if let Err(e) = message.react(http, emoji).await {
            tracing::warn!(
                "Failed to add reaction {} to message {}: {}",
                reaction.emoji,
                message.id,
                e
            );
        }
    }
}

pub struct MirrorService<'a> {
    http: &'a Http,
    settings: &'a BotSettings,
    template: &'a EmbedTemplate,
    word_filter: Option<&'a WordFilter>,
}

impl<'a> MirrorService<'a> {
    /// Creates a new MirrorService instance.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client
    /// - `settings` - Routing table, reactions and author filter
    /// - `template` - Shared embed look
    /// - `word_filter` - Word list to flag, if configured
    pub fn new(
        http: &'a Http,
        settings: &'a BotSettings,
        template: &'a EmbedTemplate,
        word_filter: Option<&'a WordFilter>,
    ) -> Self {
        Self {
            http,
            settings,
            template,
            word_filter,
        }
    }

    /// Posts an item to its channel and adds its reactions.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - The mirror message
    /// - `Ok(None)` - Item filtered out or no channel configured for its feed
    /// - `Err(AppError::DiscordErr)` - Sending the message failed
    pub async fn post(&self, item: &RedditItem) -> Result<Option<Message>, AppError> {
        if !should_mirror(self.settings, item) {
            tracing::debug!("Not mirroring {} by ignored author", item.fullname());
            return Ok(None);
        }

        let Some(channel_id) = channel_for(&self.settings.channels, item.source) else {
            tracing::debug!("No channel configured for {} items", item.source);
            return Ok(None);
        };

        let flagged = flagged_words(self.word_filter, item);
        let embed = item_embed(self.template, item, &flagged);
        let message = ChannelId::new(channel_id)
            .send_message(self.http, CreateMessage::new().embed(embed))
            .await?;

        add_reactions(self.http, &message, &reactions_for(self.settings, item)).await;

        Ok(Some(message))
    }
}
