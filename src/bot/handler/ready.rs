//! Ready event handler.
//!
//! Fired once per gateway connection. Stores the bot avatar for embed footers,
//! sets the presence and refreshes the reactions info message.

use serenity::{
    all::{ActivityData, ChannelId, Context, EditMessage, MessageId, Ready},
    http::Http,
};

use crate::{
    error::AppError,
    model::settings::BotSettings,
    service::embed::{reactions_embed, EmbedTemplate},
    state::BotState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    state.set_footer_icon(ready.user.face()).await;

    let settings = state.settings().await;
    set_presence(&ctx, &settings);

    let template = state.template().await;
    if let Err(e) = update_reactions_message(&ctx.http, &settings, &template).await {
        tracing::error!("Failed to update reactions message: {}", e);
    }
}

/// Activity text listing the moderated subreddits.
pub fn activity_name(settings: &BotSettings) -> String {
    settings
        .subreddits
        .iter()
        .map(|sub| format!("r/{}", sub.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sets the "Watching r/..." presence unless disabled in the settings.
pub fn set_presence(ctx: &Context, settings: &BotSettings) {
    if settings.change_presence {
        ctx.set_activity(Some(ActivityData::watching(activity_name(settings))));
    }
}

/// Edits the configured info message with the current reactions.
///
/// Does nothing when no reactions message is configured.
///
/// # Returns
/// - `Ok(())` - Message edited or none configured
/// - `Err(AppError::DiscordErr)` - The message could not be edited
pub async fn update_reactions_message(
    http: &Http,
    settings: &BotSettings,
    template: &EmbedTemplate,
) -> Result<(), AppError> {
    let Some(target) = settings.reactions_message else {
        return Ok(());
    };

    ChannelId::new(target.channel_id)
        .edit_message(
            http,
            MessageId::new(target.message_id),
            EditMessage::new().embed(reactions_embed(template, settings)),
        )
        .await?;

    tracing::debug!("Updated reactions message {}", target.message_id);

    Ok(())
}
