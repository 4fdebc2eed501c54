use super::*;

/// Tests that only rows without an export timestamp are returned.
///
/// Expected: Ok with the pending row only
#[tokio::test]
async fn returns_only_pending_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ModActionFactory::new(db)
        .exported_at(Utc::now())
        .build()
        .await?;
    let pending = ModActionFactory::new(db).build().await?;

    let repo = ModActionRepository::new(db);
    let records = repo.get_unexported().await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, pending.id);

    Ok(())
}
