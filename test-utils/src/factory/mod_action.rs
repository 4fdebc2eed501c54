//! Action log factory for creating test `mod_action` rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test action log rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mod_action::ModActionFactory;
///
/// let action = ModActionFactory::new(&db)
///     .moderator("Lester")
///     .approved(false)
///     .build()
///     .await?;
/// ```
pub struct ModActionFactory<'a> {
    db: &'a DatabaseConnection,
    moderator: String,
    moderator_id: String,
    item_id: String,
    item_kind: String,
    subreddit: String,
    author: Option<String>,
    emoji: String,
    approved: bool,
    actions: Vec<String>,
    created_at: DateTime<Utc>,
    exported_at: Option<DateTime<Utc>>,
}

impl<'a> ModActionFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - moderator: `"Moderator {id}"`, moderator_id: `"{id}"`
    /// - item_id: `"t3_test{id}"`, item_kind: `"submission"`, subreddit: `"gtaonline"`
    /// - author: `Some("author{id}")`, emoji: `"✔"`
    /// - approved: `true`, actions: `["approved"]`
    /// - created_at: now, exported_at: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            moderator: format!("Moderator {}", id),
            moderator_id: id.to_string(),
            item_id: format!("t3_test{}", id),
            item_kind: "submission".to_string(),
            subreddit: "gtaonline".to_string(),
            author: Some(format!("author{}", id)),
            emoji: "✔".to_string(),
            approved: true,
            actions: vec!["approved".to_string()],
            created_at: Utc::now(),
            exported_at: None,
        }
    }

    /// Sets the moderator display name.
    pub fn moderator(mut self, moderator: impl Into<String>) -> Self {
        self.moderator = moderator.into();
        self
    }

    /// Sets the item fullname.
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = item_id.into();
        self
    }

    /// Sets the item kind (`submission`, `comment`, `message`).
    pub fn item_kind(mut self, item_kind: impl Into<String>) -> Self {
        self.item_kind = item_kind.into();
        self
    }

    /// Sets whether the action approved the item.
    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    /// Sets the performed actions.
    pub fn actions(mut self, actions: &[&str]) -> Self {
        self.actions = actions.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the row as already exported at the given time.
    pub fn exported_at(mut self, exported_at: DateTime<Utc>) -> Self {
        self.exported_at = Some(exported_at);
        self
    }

    /// Builds and inserts the row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mod_action::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mod_action::Model, DbErr> {
        let actions = serde_json::to_string(&self.actions)
            .map_err(|e| DbErr::Custom(format!("Failed to encode actions: {}", e)))?;

        entity::mod_action::ActiveModel {
            id: ActiveValue::NotSet,
            moderator: ActiveValue::Set(self.moderator),
            moderator_id: ActiveValue::Set(self.moderator_id),
            item_id: ActiveValue::Set(self.item_id),
            item_kind: ActiveValue::Set(self.item_kind),
            subreddit: ActiveValue::Set(self.subreddit),
            author: ActiveValue::Set(self.author),
            emoji: ActiveValue::Set(self.emoji),
            approved: ActiveValue::Set(self.approved),
            actions: ActiveValue::Set(actions),
            created_at: ActiveValue::Set(self.created_at),
            exported_at: ActiveValue::Set(self.exported_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an action log row with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::mod_action::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_mod_action(
    db: &DatabaseConnection,
) -> Result<entity::mod_action::Model, DbErr> {
    ModActionFactory::new(db).build().await
}
