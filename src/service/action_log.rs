//! Recording moderation results.
//!
//! Every result is appended to the `mod_action` table. When a document store is
//! configured the row is mirrored there right away; rows whose mirror failed stay
//! unexported and are picked up by the sync job.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::mod_action::ModActionRepository,
    error::AppError,
    model::{
        mod_action::{CreateModActionParams, ModActionRecord},
        reaction::ActionResult,
        stats::ModStats,
    },
    service::{firestore::FirestoreClient, stats},
};

pub struct ActionLogService<'a> {
    db: &'a DatabaseConnection,
    firestore: Option<&'a FirestoreClient>,
}

impl<'a> ActionLogService<'a> {
    /// Creates a new ActionLogService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `firestore` - Document store mirror, if configured
    pub fn new(db: &'a DatabaseConnection, firestore: Option<&'a FirestoreClient>) -> Self {
        Self { db, firestore }
    }

    /// Appends a moderation result to the log and mirrors it.
    ///
    /// A failed mirror is logged and leaves the row pending; only the database write
    /// can fail this call. The export lock is held from the insert until the mirror
    /// finished so a concurrent `export_pending` never sees the row half exported.
    ///
    /// # Returns
    /// - `Ok(ModActionRecord)` - The stored row
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn record(&self, result: &ActionResult) -> Result<ModActionRecord, AppError> {
        let _export = match self.firestore {
            Some(firestore) => Some(firestore.lock_exports().await),
            None => None,
        };

        let repo = ModActionRepository::new(self.db);
        let mut record = repo.create(CreateModActionParams::from_result(result)).await?;

        tracing::info!(
            "{} {} {} by /u/{} ({})",
            record.moderator,
            record.actions.join(", "),
            record.item_id,
            record.author.as_deref().unwrap_or("[deleted]"),
            record.subreddit
        );

        if let Some(firestore) = self.firestore {
            match firestore.add_document(&record).await {
                Ok(_) => {
                    let now = Utc::now();
                    repo.mark_exported(record.id, now).await?;
                    record.exported_at = Some(now);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to mirror mod action {} to Firestore, will retry: {}",
                        record.id,
                        e
                    );
                }
            }
        }

        Ok(record)
    }

    /// Exports every pending row to the document store, oldest first.
    ///
    /// Stops at the first failed write so rows are exported in order.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rows exported; 0 without a document store
    /// - `Err(AppError)` - A write or the bookkeeping update failed
    pub async fn export_pending(&self) -> Result<usize, AppError> {
        let Some(firestore) = self.firestore else {
            return Ok(0);
        };

        let _export = firestore.lock_exports().await;
        let repo = ModActionRepository::new(self.db);
        let pending = repo.get_unexported().await?;

        let mut exported = 0;
        for record in &pending {
            firestore.add_document(record).await?;
            repo.mark_exported(record.id, Utc::now()).await?;
            exported += 1;
        }

        Ok(exported)
    }

    /// Statistics over the whole log.
    pub async fn stats(&self) -> Result<ModStats, AppError> {
        let records = ModActionRepository::new(self.db).get_all().await?;

        Ok(stats::compute(&records))
    }
}
