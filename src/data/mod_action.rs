//! Action log repository.
//!
//! The action log is append-only: rows are inserted once and only their export
//! timestamp is ever updated afterwards.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::mod_action::{CreateModActionParams, ModActionRecord};

/// Repository providing database operations for the moderation action log.
pub struct ModActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModActionRepository<'a> {
    /// Creates a new ModActionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a moderation action to the log.
    ///
    /// # Arguments
    /// - `params` - Outcome of a reaction to record
    ///
    /// # Returns
    /// - `Ok(ModActionRecord)` - The stored row, not yet exported
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateModActionParams) -> Result<ModActionRecord, DbErr> {
        let actions = serde_json::to_string(&params.actions)
            .map_err(|e| DbErr::Custom(format!("Failed to encode actions: {}", e)))?;

        let entity = entity::mod_action::ActiveModel {
            id: ActiveValue::NotSet,
            moderator: ActiveValue::Set(params.moderator),
            moderator_id: ActiveValue::Set(params.moderator_id.to_string()),
            item_id: ActiveValue::Set(params.item_id),
            item_kind: ActiveValue::Set(params.item_kind),
            subreddit: ActiveValue::Set(params.subreddit),
            author: ActiveValue::Set(params.author),
            emoji: ActiveValue::Set(params.emoji),
            approved: ActiveValue::Set(params.approved),
            actions: ActiveValue::Set(actions),
            created_at: ActiveValue::Set(params.created_at),
            exported_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(ModActionRecord::from_entity(entity))
    }

    /// Gets every logged action, oldest first.
    pub async fn get_all(&self) -> Result<Vec<ModActionRecord>, DbErr> {
        let entities = entity::prelude::ModAction::find()
            .order_by_asc(entity::mod_action::Column::CreatedAt)
            .order_by_asc(entity::mod_action::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ModActionRecord::from_entity)
            .collect())
    }

    /// Gets actions that have not been exported to the document store, oldest first.
    pub async fn get_unexported(&self) -> Result<Vec<ModActionRecord>, DbErr> {
        let entities = entity::prelude::ModAction::find()
            .filter(entity::mod_action::Column::ExportedAt.is_null())
            .order_by_asc(entity::mod_action::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ModActionRecord::from_entity)
            .collect())
    }

    /// Records that an action was exported.
    ///
    /// Only the `exported_at` column is written.
    ///
    /// # Arguments
    /// - `id` - Row id of the action
    /// - `exported_at` - Time of the export
    ///
    /// # Returns
    /// - `Ok(())` - Row updated
    /// - `Err(DbErr::RecordNotUpdated)` - No row with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn mark_exported(&self, id: i32, exported_at: DateTime<Utc>) -> Result<(), DbErr> {
        let result = entity::prelude::ModAction::update_many()
            .col_expr(
                entity::mod_action::Column::ExportedAt,
                sea_orm::sea_query::Expr::value(Some(exported_at)),
            )
            .filter(entity::mod_action::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }
}
