use super::*;

/// Tests that touched keys survive a prune.
///
/// Expected: Ok with the touched row kept and the other row pruned
#[tokio::test]
async fn keeps_touched_keys_alive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = Utc::now() - Duration::days(10);
    create_seen_item_at(db, "gtaonline", "new", "t3_a", old).await?;
    create_seen_item_at(db, "gtaonline", "new", "t3_b", old).await?;

    let repo = SeenItemRepository::new(db);
    let touched = repo
        .touch("gtaonline", "new", &keys(&["t3_a", "t3_missing"]), Utc::now())
        .await?;
    assert_eq!(touched, 1);

    let pruned = repo.prune_older_than(Utc::now() - Duration::days(7)).await?;

    assert_eq!(pruned, 1);
    assert_eq!(
        repo.filter_unseen("gtaonline", "new", &keys(&["t3_a", "t3_b"]))
            .await?,
        keys(&["t3_b"])
    );

    Ok(())
}
