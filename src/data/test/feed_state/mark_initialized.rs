use super::*;

/// Tests marking a feed as initialized.
///
/// Expected: Ok(()) and the feed reports as initialized
#[tokio::test]
async fn marks_feed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedStateRepository::new(db);
    repo.mark_initialized("gtaonline", "mail", Utc::now()).await?;

    assert!(repo.is_initialized("gtaonline", "mail").await?);

    Ok(())
}

