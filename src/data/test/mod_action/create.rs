use super::*;

fn params() -> CreateModActionParams {
    CreateModActionParams {
        moderator: "Lester".to_string(),
        moderator_id: 734714209342062602,
        item_id: "t1_fyb2k3d".to_string(),
        item_kind: "comment".to_string(),
        subreddit: "gtaonline".to_string(),
        author: Some("PlayerTwo".to_string()),
        emoji: "💣".to_string(),
        approved: false,
        actions: vec!["removed as spam".to_string(), "locked".to_string()],
        created_at: Utc::now(),
    }
}

/// Tests appending an action to the log.
///
/// Verifies that every field is stored, the actions are encoded as a JSON array and
/// the row starts out unexported.
///
/// Expected: Ok with stored record
#[tokio::test]
async fn stores_action() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModActionRepository::new(db);
    let record = repo.create(params()).await?;

    assert_eq!(record.moderator, "Lester");
    assert_eq!(record.moderator_id, "734714209342062602");
    assert_eq!(record.item_id, "t1_fyb2k3d");
    assert!(!record.approved);
    assert_eq!(record.actions, vec!["removed as spam", "locked"]);
    assert!(record.exported_at.is_none());

    let stored = entity::prelude::ModAction::find_by_id(record.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.actions, r#"["removed as spam","locked"]"#);

    Ok(())
}

/// Tests that deleted authors are stored as null.
///
/// Expected: Ok with `author` None
#[tokio::test]
async fn stores_missing_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_action_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModActionRepository::new(db);
    let record = repo
        .create(CreateModActionParams {
            author: None,
            ..params()
        })
        .await?;

    assert!(record.author.is_none());

    Ok(())
}

/// Tests that appending without the table fails.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModActionRepository::new(db);
    let result = repo.create(params()).await;

    assert!(result.is_err());

    Ok(())
}
