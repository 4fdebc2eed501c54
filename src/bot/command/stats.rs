use serenity::all::{Context, CreateMessage, Message};

use crate::{
    error::AppError,
    service::{action_log::ActionLogService, embed::stats_embed},
    state::BotState,
};

/// Posts moderation statistics from the action log.
pub async fn run(state: &BotState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let stats = ActionLogService::new(&state.db, state.firestore.as_ref())
        .stats()
        .await?;
    let template = state.template().await;

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(stats_embed(&template, &stats)),
        )
        .await?;

    Ok(())
}
