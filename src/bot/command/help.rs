use serenity::all::{Context, CreateMessage, Message};

use crate::{error::AppError, service::embed::help_embed, state::BotState};

/// Posts the list of commands.
pub async fn run(state: &BotState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let settings = state.settings().await;
    let template = state.template().await;

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(help_embed(&template, &settings.command_prefix)),
        )
        .await?;

    Ok(())
}
