//! Environment and settings file configuration.
//!
//! Secrets and deployment paths come from the environment (after `dotenvy` loads a
//! `.env` file); everything else comes from the JSON settings file so it can be
//! re-read at runtime by the `reload` command.

use std::path::{Path, PathBuf};

use crate::{
    error::config::ConfigError,
    model::settings::BotSettings,
};

const DEFAULT_SETTINGS_PATH: &str = "lester.json";
const DEFAULT_FIRESTORE_COLLECTION: &str = "mod_actions";
const FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const REDDIT_AUTH_URL: &str = "https://www.reddit.com";
const REDDIT_API_URL: &str = "https://oauth.reddit.com";

/// Shortest poll interval accepted from the settings file.
pub const MIN_POLL_INTERVAL_SECONDS: u64 = 5;

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Document store the action log is mirrored to.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub access_token: String,
    pub collection: String,
}

/// Configuration shared by every CLI command.
pub struct Config {
    pub database_url: String,
    pub settings_path: PathBuf,
    pub firestore: Option<FirestoreConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let firestore = match (
            optional("FIRESTORE_PROJECT_ID"),
            optional("FIRESTORE_ACCESS_TOKEN"),
        ) {
            (Some(project_id), Some(access_token)) => Some(FirestoreConfig {
                base_url: FIRESTORE_URL.to_string(),
                project_id,
                access_token,
                collection: optional("FIRESTORE_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_FIRESTORE_COLLECTION.to_string()),
            }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar(
                    "FIRESTORE_ACCESS_TOKEN".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("FIRESTORE_PROJECT_ID".to_string()))
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            settings_path: PathBuf::from(
                optional("LESTER_SETTINGS").unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string()),
            ),
            firestore,
        })
    }
}

/// Reddit "script" application credentials.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
    pub auth_url: String,
    pub api_url: String,
}

/// Secrets required to run the bot.
pub struct BotCredentials {
    pub discord_bot_token: String,
    pub reddit: RedditCredentials,
}

impl BotCredentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = required("REDDIT_USERNAME")?;
        let user_agent = optional("REDDIT_USER_AGENT").unwrap_or_else(|| {
            format!(
                "lester:v{} (by /u/{})",
                env!("CARGO_PKG_VERSION"),
                username
            )
        });

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            reddit: RedditCredentials {
                client_id: required("REDDIT_CLIENT_ID")?,
                client_secret: required("REDDIT_CLIENT_SECRET")?,
                username,
                password: required("REDDIT_PASSWORD")?,
                user_agent,
                auth_url: REDDIT_AUTH_URL.to_string(),
                api_url: REDDIT_API_URL.to_string(),
            },
        })
    }
}

/// Reads and validates the settings file.
///
/// # Arguments
/// - `path` - Location of the JSON settings file
///
/// # Returns
/// - `Ok(BotSettings)` - Parsed settings
/// - `Err(ConfigError::SettingsRead)` - File missing or unreadable
/// - `Err(ConfigError::SettingsParse)` - Not valid JSON or wrong shape
/// - `Err(ConfigError::InvalidSettings)` - No subreddits, empty prefix, or poll
///   interval below the minimum
pub fn load_settings(path: &Path) -> Result<BotSettings, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_settings(path, &raw)
}

fn parse_settings(path: &Path, raw: &str) -> Result<BotSettings, ConfigError> {
    let settings: BotSettings =
        serde_json::from_str(raw).map_err(|source| ConfigError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;

    if settings.subreddits.is_empty() {
        return Err(ConfigError::InvalidSettings(
            "at least one subreddit must be configured".to_string(),
        ));
    }
    if settings.command_prefix.is_empty() {
        return Err(ConfigError::InvalidSettings(
            "command_prefix must not be empty".to_string(),
        ));
    }
    if settings.poll_interval_seconds < MIN_POLL_INTERVAL_SECONDS {
        return Err(ConfigError::InvalidSettings(format!(
            "poll_interval_seconds must be at least {}",
            MIN_POLL_INTERVAL_SECONDS
        )));
    }
    if let Some(field) = zero_id(&settings) {
        return Err(ConfigError::InvalidSettings(format!(
            "{} must not be 0",
            field
        )));
    }

    Ok(settings)
}

/// First Discord id field set to 0, which is never a valid snowflake.
fn zero_id(settings: &BotSettings) -> Option<&'static str> {
    let channels = &settings.channels;
    let mut ids = vec![
        ("channels.new", channels.new),
        ("channels.comments", channels.comments),
        ("channels.mail", channels.mail),
        ("channels.queue", channels.queue),
        ("channels.reports", channels.reports),
        ("channels.actions", channels.actions),
        ("channels.approved", channels.approved),
        ("channels.removed", channels.removed),
        ("moderator_role_id", settings.moderator_role_id),
    ];
    if let Some(message) = settings.reactions_message {
        ids.push(("reactions_message.channel_id", Some(message.channel_id)));
        ids.push(("reactions_message.message_id", Some(message.message_id)));
    }

    ids.into_iter()
        .find(|(_, id)| *id == Some(0))
        .map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<BotSettings, ConfigError> {
        parse_settings(Path::new("lester.json"), raw)
    }

    #[test]
    fn accepts_full_settings() {
        let settings = parse(
            r#"{
                "command_prefix": "?",
                "moderator_role_id": 734714209342062602,
                "channels": {"new": 1, "comments": 2, "approved": 7, "removed": 8},
                "reactions_message": {"channel_id": 734713971428425729, "message_id": 736613065889546321},
                "subreddits": [{"name": "gtaonline", "reactions": [
                    {"emoji": "✔", "types": ["submission", "comment"], "approve": true}
                ]}]
            }"#,
        )
        .unwrap();

        assert_eq!(settings.command_prefix, "?");
        assert_eq!(settings.moderator_role_id, Some(734714209342062602));
        assert_eq!(settings.channels.comments, Some(2));
        assert_eq!(
            settings.reactions_message.map(|m| m.message_id),
            Some(736613065889546321)
        );
        assert_eq!(settings.subreddits[0].reactions.len(), 1);
    }

    #[test]
    fn rejects_empty_subreddit_list() {
        let result = parse(r#"{"subreddits": []}"#);

        assert!(matches!(result, Err(ConfigError::InvalidSettings(_))));
    }

    #[test]
    fn rejects_short_poll_interval() {
        let result = parse(r#"{"poll_interval_seconds": 1, "subreddits": [{"name": "a"}]}"#);

        assert!(matches!(result, Err(ConfigError::InvalidSettings(_))));
    }

    #[test]
    fn rejects_zero_discord_ids() {
        for raw in [
            r#"{"channels": {"new": 0}, "subreddits": [{"name": "a"}]}"#,
            r#"{"moderator_role_id": 0, "subreddits": [{"name": "a"}]}"#,
            r#"{"reactions_message": {"channel_id": 1, "message_id": 0}, "subreddits": [{"name": "a"}]}"#,
        ] {
            let result = parse(raw);

            assert!(matches!(result, Err(ConfigError::InvalidSettings(_))), "{}", raw);
        }
    }

    #[test]
    fn zero_id_error_names_the_field() {
        let err = parse(r#"{"channels": {"removed": 0}, "subreddits": [{"name": "a"}]}"#)
            .unwrap_err();

        assert!(err.to_string().contains("channels.removed"));
    }

    #[test]
    fn reports_malformed_json_with_path() {
        let result = parse("{");

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::SettingsParse { .. }));
        assert!(err.to_string().contains("lester.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_settings(Path::new("/nonexistent/lester.json"));

        assert!(matches!(result, Err(ConfigError::SettingsRead { .. })));
    }
}
