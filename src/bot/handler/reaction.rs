//! Reaction event handler.
//!
//! A moderator reacting to a mirror message applies the matching moderation
//! action on Reddit, records the action, posts the outcome and removes the
//! mirror message.

use std::future::Future;

use serenity::all::{
    ChannelId, Context, CreateMessage, Member, Message, Reaction, RoleId, UserId,
};

use crate::{
    error::AppError,
    model::{
        reaction::{ActionResult, ReactionConfig},
        reddit::{ItemRef, RedditItem},
        settings::BotSettings,
    },
    service::{
        action_log::ActionLogService,
        confirmation::{
            is_confirmed, prompt_text, required_override, Override, CANCEL_EMOJI,
            CONFIRMATION_TIMEOUT, CONFIRM_EMOJI, TIMEOUT_MESSAGE,
        },
        embed::result_embed,
        moderation::{ModerationService, Moderator},
        reactions::{emoji_key, lookup, reaction_type},
        routing::result_channel,
    },
    state::BotState,
};

/// Whether a member with `roles` may moderate through reactions and commands.
///
/// Everyone may when no moderator role is configured.
pub fn is_moderator(settings: &BotSettings, roles: &[RoleId]) -> bool {
    match settings.moderator_role_id {
        Some(role_id) => roles.contains(&RoleId::new(role_id)),
        None => true,
    }
}

/// Reddit item a message refers to.
///
/// Mirror messages carry the permalink as their embed URL; messages posted by
/// users carry the link in their content.
pub fn item_ref_from_message(message: &Message) -> Option<ItemRef> {
    message
        .embeds
        .first()
        .and_then(|embed| embed.url.as_deref())
        .and_then(ItemRef::find_in)
        .or_else(|| ItemRef::find_in(&message.content))
}

/// Handle a reaction added to a message
pub async fn handle_reaction_add(state: &BotState, ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };

    let member = match reaction.member.clone() {
        Some(member) => member,
        None => match guild_id.member(&ctx, user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::error!("Failed to fetch member {}: {}", user_id, e);
                return;
            }
        },
    };
    if member.user.bot {
        return;
    }

    let settings = state.settings().await;
    if !is_moderator(&settings, &member.roles) {
        return;
    }

    let message = match reaction.message(&ctx.http).await {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("Failed to fetch reacted message {}: {}", reaction.message_id, e);
            return;
        }
    };

    let Some(item_ref) = item_ref_from_message(&message) else {
        return;
    };

    let item = match state.reddit.fetch_item(&item_ref).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            tracing::debug!("Reacted item {} no longer exists", item_ref.fullname());
            return;
        }
        Err(e) => {
            tracing::error!("Failed to fetch reacted item {}: {}", item_ref.fullname(), e);
            return;
        }
    };

    let Some(emoji) = emoji_key(&reaction.emoji) else {
        return;
    };
    let Some(config) = lookup(&settings, &item, &emoji) else {
        return;
    };

    if let Some(reason) = required_override(&item, config) {
        match confirm(&ctx, user_id, &item, &reason).await {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                tracing::error!("Failed to confirm action on {}: {}", item.fullname(), e);
                return;
            }
        }
    }

    if let Err(e) = moderate(state, &ctx, &settings, &member, &message, &item, config).await {
        tracing::error!("Failed to moderate {}: {}", item.fullname(), e);
    }
}

/// Applies the reaction, records the result, posts it and removes the mirror message.
///
/// Only applying the action can fail; once it went through on Reddit every later
/// step is logged and skipped on failure.
async fn moderate(
    state: &BotState,
    ctx: &Context,
    settings: &BotSettings,
    member: &Member,
    message: &Message,
    item: &RedditItem,
    config: &ReactionConfig,
) -> Result<(), AppError> {
    let moderator = Moderator {
        name: member.display_name().to_string(),
        discord_id: member.user.id.get(),
    };

    let result = ModerationService::new(&state.reddit)
        .apply(item, config, &moderator)
        .await?;

    let template = state.template().await;
    let log = ActionLogService::new(&state.db, state.firestore.as_ref());
    record_and_report(&log, &result, async {
        let Some(channel_id) = result_channel(&settings.channels, result.approved) else {
            return Ok(());
        };
        ChannelId::new(channel_id)
            .send_message(
                &ctx.http,
                CreateMessage::new().embed(result_embed(&template, &result)),
            )
            .await?;
        Ok::<(), AppError>(())
    })
    .await;

    if let Err(e) = message.delete(ctx).await {
        tracing::warn!("Failed to delete mirror message {}: {}", message.id, e);
    }

    Ok(())
}

/// Records an applied action, then runs `report`.
///
/// The record is written before the report starts, and a failing report never
/// undoes it.
async fn record_and_report<F>(log: &ActionLogService<'_>, result: &ActionResult, report: F)
where
    F: Future<Output = Result<(), AppError>>,
{
    if let Err(e) = log.record(result).await {
        tracing::error!(
            "Failed to record action on {}: {}",
            result.item.fullname(),
            e
        );
    }

    if let Err(e) = report.await {
        tracing::warn!(
            "Failed to post result for {}: {}",
            result.item.fullname(),
            e
        );
    }
}

/// Asks the moderator in a DM to confirm overriding another moderator.
///
/// # Returns
/// - `Ok(true)` - The moderator confirmed
/// - `Ok(false)` - The moderator cancelled or did not answer in time
/// - `Err(AppError::DiscordErr)` - The prompt could not be sent
async fn confirm(
    ctx: &Context,
    user_id: UserId,
    item: &RedditItem,
    reason: &Override,
) -> Result<bool, AppError> {
    let prompt = user_id
        .direct_message(ctx, CreateMessage::new().content(prompt_text(item, reason)))
        .await?;

    for emoji in [CONFIRM_EMOJI, CANCEL_EMOJI] {
        prompt.react(ctx, reaction_type(emoji)?).await?;
    }

    let answer = prompt
        .await_reaction(&ctx.shard)
        .author_id(user_id)
        .timeout(CONFIRMATION_TIMEOUT)
        .await;

    if let Err(e) = prompt.delete(ctx).await {
        tracing::warn!("Failed to delete confirmation prompt: {}", e);
    }

    match answer {
        Some(answer) => Ok(emoji_key(&answer.emoji).is_some_and(|emoji| is_confirmed(&emoji))),
        None => {
            user_id
                .direct_message(ctx, CreateMessage::new().content(TIMEOUT_MESSAGE))
                .await?;
            Ok(false)
        }
    }
}
