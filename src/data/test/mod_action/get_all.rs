use super::*;

/// Tests that every action is returned oldest first.
///
/// Expected: Ok with rows ordered by creation time
#[tokio::test]
async fn returns_actions_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let newer = ModActionFactory::new(db)
        .moderator("Newer")
        .created_at(now)
        .build()
        .await?;
    let older = ModActionFactory::new(db)
        .moderator("Older")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;

    let repo = ModActionRepository::new(db);
    let records = repo.get_all().await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, older.id);
    assert_eq!(records[1].id, newer.id);

    Ok(())
}

/// Tests that an empty log returns no rows.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_empty_log() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModActionRepository::new(db);
    let records = repo.get_all().await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests that a malformed actions column is kept as a single action.
///
/// Expected: Ok with the raw column as the only action
#[tokio::test]
async fn keeps_malformed_actions_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = ModActionFactory::new(db).build().await?;
    let mut active: entity::mod_action::ActiveModel = row.into();
    active.actions = sea_orm::ActiveValue::Set("approved".to_string());
    sea_orm::ActiveModelTrait::update(active, db).await?;

    let repo = ModActionRepository::new(db);
    let records = repo.get_all().await?;

    assert_eq!(records[0].actions, vec!["approved"]);

    Ok(())
}
