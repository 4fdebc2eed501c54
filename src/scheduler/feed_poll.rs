use chrono::Utc;
use serenity::http::Http;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{feed::FeedService, mirror::MirrorService},
    state::BotState,
};

/// Daily at 04:00 UTC.
const PRUNE_SCHEDULE: &str = "0 0 4 * * *";

/// Adds the feed poll job and the daily prune job.
///
/// # Arguments
/// - `scheduler` - Scheduler to register the jobs with
/// - `state` - Shared bot state
/// - `http` - Discord HTTP client used to post mirrored items
pub async fn add_jobs(
    scheduler: &JobScheduler,
    state: Arc<BotState>,
    http: Arc<Http>,
) -> Result<(), AppError> {
    let interval = Duration::from_secs(state.settings().await.poll_interval_seconds);
    let running = Arc::new(Mutex::new(()));

    let poll_state = state.clone();
    let poll = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = poll_state.clone();
        let http = http.clone();
        let running = running.clone();

        Box::pin(async move {
            // A slow poll must not overlap with the next one.
            let Ok(_guard) = running.try_lock() else {
                tracing::debug!("Previous feed poll still running, skipping");
                return;
            };

            poll_and_mirror(&state, &http).await;
        })
    })?;

    let prune = Job::new_async(PRUNE_SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            match FeedService::new(&state.db, &state.reddit)
                .prune(Utc::now())
                .await
            {
                Ok(count) => tracing::info!("Pruned {} seen feed items", count),
                Err(e) => tracing::error!("Error pruning seen feed items: {}", e),
            }
        })
    })?;

    scheduler.add(poll).await?;
    scheduler.add(prune).await?;

    tracing::info!("Polling Reddit every {}s", interval.as_secs());

    Ok(())
}

/// Polls every enabled feed and posts the new items.
async fn poll_and_mirror(state: &BotState, http: &Http) {
    let settings = state.settings().await;
    let items = FeedService::new(&state.db, &state.reddit)
        .poll_all(&settings)
        .await;
    if items.is_empty() {
        return;
    }

    tracing::debug!("Mirroring {} new items", items.len());

    let template = state.template().await;
    let word_filter = state.word_filter().await;
    let mirror = MirrorService::new(http, &settings, &template, word_filter.as_deref());

    for item in &items {
        if let Err(e) = mirror.post(item).await {
            tracing::error!("Failed to mirror {}: {}", item.fullname(), e);
        }
    }
}
