//! Discord side of the bot.
//!
//! The bot posts mirrored Reddit items, listens for moderator reactions on them
//! and answers a handful of prefix commands. Its HTTP client is shared with the
//! scheduler so feed polling can post without a second connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability
//! - `GUILD_MESSAGES` / `MESSAGE_CONTENT` - Links to Reddit items and prefix commands
//! - `GUILD_MESSAGE_REACTIONS` - Moderator reactions on mirror messages
//! - `DIRECT_MESSAGES` / `DIRECT_MESSAGE_REACTIONS` - Confirmation prompts
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
