//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, repositories wrapped by
//! services, and startup code. Discord event handlers cannot propagate errors back
//! to serenity, so they log an `AppError` and carry on.

pub mod config;
pub mod internal;
pub mod reddit;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, reddit::RedditError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup, environment loading or a settings reload.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Reddit API error: authentication, transport, status or decoding.
    #[error(transparent)]
    RedditErr(#[from] RedditError),

    /// Unexpected internal state such as a malformed emoji in the settings.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest, used by the document store export.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// File system error, e.g. writing an extracted word list.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON encoding or decoding error outside of the Reddit client.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
