//! Background jobs.
//!
//! - `feed_poll` - Polls Reddit feeds and mirrors new items, prunes seen keys daily
//! - `firestore_sync` - Retries exporting action log rows to Firestore

pub mod feed_poll;
pub mod firestore_sync;

use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;

use crate::{error::AppError, state::BotState};

/// Registers every job and starts the scheduler.
///
/// The poll interval is read once here; changing it requires a restart.
pub async fn start_scheduler(state: Arc<BotState>, http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    feed_poll::add_jobs(&scheduler, state.clone(), http).await?;
    if state.firestore.is_some() {
        firestore_sync::add_job(&scheduler, state).await?;
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}
