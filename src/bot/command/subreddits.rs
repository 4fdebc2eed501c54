use serenity::all::{Context, CreateMessage, Message};

use crate::{error::AppError, service::embed::subreddits_embed, state::BotState};

/// Posts the moderated subreddits and their streams.
pub async fn run(state: &BotState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let settings = state.settings().await;
    let template = state.template().await;

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(subreddits_embed(&template, &settings)),
        )
        .await?;

    Ok(())
}
