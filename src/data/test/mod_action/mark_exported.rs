use super::*;

/// Tests that marking a row exported sets only its export timestamp.
///
/// Expected: Ok with `exported_at` set and other columns untouched
#[tokio::test]
async fn sets_export_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = ModActionFactory::new(db)
        .moderator("Lester")
        .actions(&["removed", "banned /u/PlayerOne"])
        .build()
        .await?;

    let repo = ModActionRepository::new(db);
    repo.mark_exported(row.id, Utc::now()).await?;

    let stored = entity::prelude::ModAction::find_by_id(row.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.exported_at.is_some());
    assert_eq!(stored.moderator, "Lester");
    assert_eq!(stored.actions, row.actions);
    assert!(repo.get_unexported().await?.is_empty());

    Ok(())
}

/// Tests marking a row that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModActionRepository::new(db);
    let result = repo.mark_exported(999, Utc::now()).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
