use super::*;

/// Tests recording keys.
///
/// Expected: Ok with one row per distinct key
#[tokio::test]
async fn records_distinct_keys() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenItemRepository::new(db);
    repo.insert_many(
        "gtaonline",
        "new",
        &keys(&["t3_a", "t3_b", "t3_a"]),
        Utc::now(),
    )
    .await?;

    let count = entity::prelude::SeenItem::find().count(db).await?;
    assert_eq!(count, 2);
    assert!(repo
        .filter_unseen("gtaonline", "new", &keys(&["t3_a", "t3_b"]))
        .await?
        .is_empty());

    Ok(())
}

/// Tests that recording no keys is a no-op.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn ignores_empty_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenItemRepository::new(db);
    repo.insert_many("gtaonline", "new", &[], Utc::now()).await?;

    let count = entity::prelude::SeenItem::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
