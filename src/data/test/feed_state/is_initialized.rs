use super::*;

/// Tests that only the marked (subreddit, feed) pair counts as initialized.
///
/// Expected: Ok(false) before the marker exists, Ok(true) only for that pair afterwards
#[tokio::test]
async fn detects_marked_feed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedStateRepository::new(db);
    assert!(!repo.is_initialized("gtaonline", "reports").await?);

    create_feed_state(db, "gtaonline", "reports").await?;

    assert!(repo.is_initialized("gtaonline", "reports").await?);
    assert!(!repo.is_initialized("gtaonline", "new").await?);
    assert!(!repo.is_initialized("gta", "reports").await?);

    Ok(())
}
