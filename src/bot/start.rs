use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Builds the Discord client without connecting it.
///
/// The HTTP client is returned separately so it can be handed to the scheduler
/// before `start_bot` takes ownership of the client.
///
/// # Arguments
/// - `token` - Discord bot token
/// - `state` - Shared bot state
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(token: &str, state: Arc<BotState>) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(token, intents)
        .event_handler(Handler::new(state))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs until the connection closes.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
