use super::*;

/// Tests that rows before the cutoff are deleted.
///
/// Expected: Ok(1) with the recent row kept
#[tokio::test]
async fn deletes_old_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    create_seen_item_at(db, "gtaonline", "new", "t3_old", now - Duration::days(8)).await?;
    create_seen_item_at(db, "gtaonline", "new", "t3_recent", now - Duration::days(1)).await?;

    let repo = SeenItemRepository::new(db);
    let deleted = repo.prune_older_than(now - Duration::days(7)).await?;

    assert_eq!(deleted, 1);
    let remaining = entity::prelude::SeenItem::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].item_key, "t3_recent");

    Ok(())
}
