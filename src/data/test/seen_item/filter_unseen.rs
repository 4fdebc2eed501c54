use super::*;

/// Tests that recorded keys are filtered out and order is kept.
///
/// Expected: Ok with unseen keys in input order
#[tokio::test]
async fn drops_recorded_keys() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_seen_item(db, "gtaonline", "new", "t3_b").await?;

    let repo = SeenItemRepository::new(db);
    let unseen = repo
        .filter_unseen("gtaonline", "new", &keys(&["t3_c", "t3_b", "t3_a"]))
        .await?;

    assert_eq!(unseen, keys(&["t3_c", "t3_a"]));

    Ok(())
}

/// Tests that keys recorded for another feed do not count as seen.
///
/// Expected: Ok with every key
#[tokio::test]
async fn scopes_keys_to_feed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_seen_item(db, "gtaonline", "new", "t3_a").await?;

    let repo = SeenItemRepository::new(db);
    let unseen = repo
        .filter_unseen("gtaonline", "reports", &keys(&["t3_a:1", "t3_a"]))
        .await?;

    assert_eq!(unseen, keys(&["t3_a:1", "t3_a"]));

    Ok(())
}

/// Tests that duplicate input keys are returned once.
///
/// Expected: Ok with deduplicated keys
#[tokio::test]
async fn removes_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenItemRepository::new(db);
    let unseen = repo
        .filter_unseen("gtaonline", "new", &keys(&["t3_a", "t3_a"]))
        .await?;

    assert_eq!(unseen, keys(&["t3_a"]));

    Ok(())
}
