use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::action_log::ActionLogService, state::BotState};

/// Every 5 minutes.
const SYNC_SCHEDULE: &str = "0 */5 * * * *";

/// Adds the job exporting action log rows whose immediate mirror failed.
pub async fn add_job(scheduler: &JobScheduler, state: Arc<BotState>) -> Result<(), AppError> {
    let job = Job::new_async(SYNC_SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            let service = ActionLogService::new(&state.db, state.firestore.as_ref());

            match service.export_pending().await {
                Ok(0) => {}
                Ok(count) => tracing::info!("{} mod actions added to Firestore.", count),
                Err(e) => tracing::error!("Error exporting mod actions to Firestore: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;

    Ok(())
}
