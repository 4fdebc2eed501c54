use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the README or `.env.example` for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Settings file could not be read.
    #[error("Failed to read settings file {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON or does not match the expected shape.
    #[error("Failed to parse settings file {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Settings parsed but contain values the bot cannot run with.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
