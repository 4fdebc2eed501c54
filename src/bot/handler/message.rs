use serenity::all::{Context, Message};

use crate::{
    bot::command,
    model::reddit::ItemRef,
    service::{mirror::add_reactions, reactions::reactions_for},
    state::BotState,
};

/// Handle message creation in a channel
///
/// A guild message linking a Reddit item gets that item's reactions so it can be
/// moderated like a mirror message. Prefix commands are dispatched afterwards.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    if let Some(item_ref) = ItemRef::find_in(&message.content) {
        add_item_reactions(state, &ctx, &message, &item_ref).await;
    }

    command::dispatch(state, &ctx, &message).await;
}

async fn add_item_reactions(state: &BotState, ctx: &Context, message: &Message, item_ref: &ItemRef) {
    let item = match state.reddit.fetch_item(item_ref).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            tracing::debug!("Linked item {} not found", item_ref.fullname());
            return;
        }
        Err(e) => {
            tracing::error!("Failed to fetch linked item {}: {}", item_ref.fullname(), e);
            return;
        }
    };

    let settings = state.settings().await;
    add_reactions(&ctx.http, message, &reactions_for(&settings, &item)).await;
}
