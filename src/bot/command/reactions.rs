use serenity::all::{Context, CreateMessage, Message};

use crate::{error::AppError, service::embed::reactions_embed, state::BotState};

/// Posts what every configured reaction does.
pub async fn run(state: &BotState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let settings = state.settings().await;
    let template = state.template().await;

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(reactions_embed(&template, &settings)),
        )
        .await?;

    Ok(())
}
