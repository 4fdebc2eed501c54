//! Prefix commands.
//!
//! Commands are read from guild messages starting with the configured prefix,
//! e.g. `!reload`. Unknown commands are ignored.

pub mod help;
pub mod reactions;
pub mod reload;
pub mod stats;
pub mod subreddits;

use serenity::all::{Context, Message};

use crate::{bot::handler::reaction::is_moderator, state::BotState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Reload,
    Subreddits,
    Reactions,
    Stats,
}

impl Command {
    /// Whether only moderators may run the command.
    pub fn requires_moderator(&self) -> bool {
        matches!(self, Self::Reload | Self::Stats)
    }
}

/// Parses a message into a command.
///
/// The command name is the first word after the prefix, compared case-insensitively.
/// Anything after it is ignored.
pub fn parse_command(content: &str, prefix: &str) -> Option<Command> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let name = rest.split_whitespace().next()?;

    match name.to_lowercase().as_str() {
        "help" => Some(Command::Help),
        "reload" => Some(Command::Reload),
        "subreddits" => Some(Command::Subreddits),
        "reactions" => Some(Command::Reactions),
        "stats" => Some(Command::Stats),
        _ => None,
    }
}

/// Runs the command in `message`, if any.
pub async fn dispatch(state: &BotState, ctx: &Context, message: &Message) {
    let settings = state.settings().await;
    let Some(command) = parse_command(&message.content, &settings.command_prefix) else {
        return;
    };

    if command.requires_moderator() {
        let roles = message
            .member
            .as_ref()
            .map(|member| member.roles.as_slice())
            .unwrap_or_default();
        if !is_moderator(&settings, roles) {
            tracing::debug!(
                "Ignoring {:?} from non-moderator {}",
                command,
                message.author.name
            );
            return;
        }
    }

    tracing::debug!("Running {:?} for {}", command, message.author.name);

    let result = match command {
        Command::Help => help::run(state, ctx, message).await,
        Command::Reload => reload::run(state, ctx, message).await,
        Command::Subreddits => subreddits::run(state, ctx, message).await,
        Command::Reactions => reactions::run(state, ctx, message).await,
        Command::Stats => stats::run(state, ctx, message).await,
    };

    if let Err(e) = result {
        tracing::error!("Failed to run {:?} command: {}", command, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command("!help", "!"), Some(Command::Help));
        assert_eq!(parse_command("  !Reload now", "!"), Some(Command::Reload));
        assert_eq!(parse_command("lester stats", "lester "), Some(Command::Stats));
    }

    #[test]
    fn ignores_unknown_and_unprefixed_messages() {
        assert_eq!(parse_command("!ban everyone", "!"), None);
        assert_eq!(parse_command("help", "!"), None);
        assert_eq!(parse_command("!", "!"), None);
    }

    #[test]
    fn only_reload_and_stats_need_moderators() {
        assert!(Command::Reload.requires_moderator());
        assert!(Command::Stats.requires_moderator());
        assert!(!Command::Help.requires_moderator());
        assert!(!Command::Reactions.requires_moderator());
    }
}
