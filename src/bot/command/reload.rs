use serenity::all::{Context, Message};
use std::time::Duration;

use crate::{
    bot::handler::ready::{set_presence, update_reactions_message},
    error::AppError,
    state::BotState,
};

const RELOADED_MESSAGE: &str = "Reloaded all subreddit reactions!";

/// How long the confirmation stays visible.
const NOTICE_LIFETIME: Duration = Duration::from_secs(3);

/// Re-reads the settings file and refreshes everything derived from it.
///
/// The invoking message is deleted first. A settings file that fails to load
/// leaves the previous settings in place and is reported in the channel.
pub async fn run(state: &BotState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    if let Err(e) = message.delete(ctx).await {
        tracing::warn!("Failed to delete reload command message: {}", e);
    }

    let settings = match state.reload().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to reload settings: {}", e);
            message
                .channel_id
                .say(&ctx.http, format!("Failed to reload settings: {}", e))
                .await?;
            return Ok(());
        }
    };

    set_presence(ctx, &settings);
    let template = state.template().await;
    update_reactions_message(&ctx.http, &settings, &template).await?;

    tracing::info!("Reloaded settings for {} subreddits", settings.subreddits.len());

    let notice = message.channel_id.say(&ctx.http, RELOADED_MESSAGE).await?;
    tokio::time::sleep(NOTICE_LIFETIME).await;
    notice.delete(ctx).await?;

    Ok(())
}
