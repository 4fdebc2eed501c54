mod bot;
mod config;
mod data;
mod error;
mod model;
mod reddit;
mod scheduler;
mod service;
mod startup;
mod state;

use clap::{Parser, Subcommand};
use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::{
    config::{load_settings, BotCredentials, Config},
    error::{config::ConfigError, AppError},
    reddit::RedditClient,
    service::{
        action_log::ActionLogService, firestore::FirestoreClient, stats,
        word_filter::extract_language,
    },
    state::BotState,
};

#[derive(Parser, Debug)]
#[command(
    name = "lester",
    version,
    about = "Mirrors Reddit moderation events into Discord"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the bot (default)
    Run,
    /// Print per-moderator action counts from the action log
    Stats,
    /// Push action log rows not yet exported to Firestore
    Export,
    /// Extract one language from a dirty word export into a word list
    Words {
        /// JSON export with a `RECORDS` array of `{word, language}`
        #[arg(long)]
        records: PathBuf,
        /// Word list to write, one word per line
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value = "en")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(Config::from_env()?).await,
        Command::Stats => print_stats(Config::from_env()?).await,
        Command::Export => export(Config::from_env()?).await,
        Command::Words {
            records,
            output,
            language,
        } => write_words(&records, &output, &language),
    }
}

/// Logs to stdout filtered by `RUST_LOG`, and warnings to `LOG_FILE` when set.
fn init_tracing() -> Result<(), AppError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lester=info".into());

    let file_layer = match std::env::var("LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(LevelFilter::WARN),
            )
        }
        _ => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .with(file_layer)
        .init();

    Ok(())
}

async fn run(config: Config) -> Result<(), AppError> {
    let credentials = BotCredentials::from_env()?;
    let settings = load_settings(&config.settings_path)?;

    let db = startup::connect_to_database(&config.database_url).await?;
    let http_client = startup::setup_reqwest_client()?;

    let reddit = Arc::new(RedditClient::new(http_client.clone(), credentials.reddit));
    let firestore = config
        .firestore
        .map(|firestore| FirestoreClient::new(http_client, firestore));
    if firestore.is_none() {
        tracing::info!("Firestore not configured, action log stays local");
    }

    let state = Arc::new(BotState::new(
        db,
        reddit,
        firestore,
        config.settings_path,
        settings,
    )?);

    tracing::info!(
        "Moderating {} subreddits as /u/{}",
        state.settings().await.subreddits.len(),
        state.reddit.username()
    );

    let (bot_client, discord_http) =
        bot::start::init_bot(&credentials.discord_bot_token, state.clone()).await?;

    scheduler::start_scheduler(state, discord_http).await?;

    bot::start::start_bot(bot_client).await
}

async fn print_stats(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config.database_url).await?;
    let mod_stats = ActionLogService::new(&db, None).stats().await?;

    println!("{}", stats::report(&mod_stats));

    Ok(())
}

async fn export(config: Config) -> Result<(), AppError> {
    let Some(firestore_config) = config.firestore else {
        return Err(ConfigError::MissingEnvVar("FIRESTORE_PROJECT_ID".to_string()).into());
    };

    let db = startup::connect_to_database(&config.database_url).await?;
    let firestore = FirestoreClient::new(startup::setup_reqwest_client()?, firestore_config);
    let count = ActionLogService::new(&db, Some(&firestore))
        .export_pending()
        .await?;

    println!("{} mod actions added to Firestore.", count);

    Ok(())
}

fn write_words(records: &Path, output: &Path, language: &str) -> Result<(), AppError> {
    let contents = std::fs::read_to_string(records)?;
    let words = extract_language(&contents, language)?;

    std::fs::write(output, words.join("\n"))?;

    println!("Wrote {} {} words to {}", words.len(), language, output.display());

    Ok(())
}
