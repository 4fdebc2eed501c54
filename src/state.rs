//! State shared by the Discord event handlers and the scheduler.

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

use crate::{
    config::load_settings,
    error::AppError,
    model::settings::BotSettings,
    reddit::RedditClient,
    service::{embed::EmbedTemplate, firestore::FirestoreClient, word_filter::WordFilter},
};

/// Settings and the word filter derived from them, swapped together on reload.
struct Loaded {
    settings: Arc<BotSettings>,
    word_filter: Option<Arc<WordFilter>>,
}

pub struct BotState {
    pub db: DatabaseConnection,
    pub reddit: Arc<RedditClient>,
    pub firestore: Option<FirestoreClient>,
    pub settings_path: PathBuf,
    loaded: RwLock<Loaded>,
    /// Bot avatar used as footer icon, set once the gateway is ready.
    footer_icon: RwLock<Option<String>>,
}

impl BotState {
    /// Creates the shared state from already loaded settings.
    ///
    /// # Returns
    /// - `Ok(BotState)` - State with the word list loaded
    /// - `Err(AppError)` - The configured word list cannot be read
    pub fn new(
        db: DatabaseConnection,
        reddit: Arc<RedditClient>,
        firestore: Option<FirestoreClient>,
        settings_path: PathBuf,
        settings: BotSettings,
    ) -> Result<Self, AppError> {
        let loaded = prepare(settings, reddit.username())?;

        Ok(Self {
            db,
            reddit,
            firestore,
            settings_path,
            loaded: RwLock::new(loaded),
            footer_icon: RwLock::new(None),
        })
    }

    pub async fn settings(&self) -> Arc<BotSettings> {
        self.loaded.read().await.settings.clone()
    }

    pub async fn word_filter(&self) -> Option<Arc<WordFilter>> {
        self.loaded.read().await.word_filter.clone()
    }

    pub async fn set_footer_icon(&self, url: String) {
        *self.footer_icon.write().await = Some(url);
    }

    pub async fn template(&self) -> EmbedTemplate {
        let settings = self.settings().await;
        let icon = self.footer_icon.read().await.clone();

        EmbedTemplate::from_settings(&settings, icon)
    }

    /// Re-reads the settings file and the word list.
    ///
    /// The current settings stay in effect when the file is invalid.
    ///
    /// # Returns
    /// - `Ok(Arc<BotSettings>)` - The new settings
    /// - `Err(AppError::ConfigErr)` - Settings file missing or invalid
    /// - `Err(AppError::IoErr)` - Word list missing
    pub async fn reload(&self) -> Result<Arc<BotSettings>, AppError> {
        let settings = load_settings(&self.settings_path)?;
        let loaded = prepare(settings, self.reddit.username())?;
        let settings = loaded.settings.clone();

        *self.loaded.write().await = loaded;
        tracing::info!("Reloaded settings from {}", self.settings_path.display());

        Ok(settings)
    }
}

/// Adds the bot's own Reddit account to the ignored comment authors and loads the
/// word list.
fn prepare(mut settings: BotSettings, reddit_username: &str) -> Result<Loaded, AppError> {
    if !settings.ignores_comment_author(reddit_username) {
        settings
            .ignored_comment_authors
            .push(reddit_username.to_string());
    }

    let word_filter = match &settings.word_list {
        Some(path) => {
            let filter = WordFilter::load(std::path::Path::new(path), settings.word_match)?;
            tracing::info!("Loaded {} words from {}", filter.len(), path);
            Some(Arc::new(filter))
        }
        None => None,
    };

    Ok(Loaded {
        settings: Arc::new(settings),
        word_filter,
    })
}
