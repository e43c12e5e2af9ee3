use super::*;

/// Tests claiming an open giveaway.
///
/// Expected: Ok(true) and end_time set
#[tokio::test]
async fn claims_open_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_open_giveaway(db, "1").await?;

    let repo = GiveawayRepository::new(db);
    let claimed = repo.claim_close(giveaway.id, Utc::now()).await?;

    assert!(claimed);
    let stored = entity::prelude::Giveaway::find_by_id(giveaway.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.end_time.is_some());

    Ok(())
}

/// Tests that a giveaway can only be claimed once.
///
/// Verifies the compare-and-swap keeps the first close time when a second claim runs.
///
/// Expected: Ok(false) on the second claim with the original end_time kept
#[tokio::test]
async fn second_claim_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_open_giveaway(db, "1").await?;
    let first_end = Utc::now();

    let repo = GiveawayRepository::new(db);
    assert!(repo.claim_close(giveaway.id, first_end).await?);
    let second = repo
        .claim_close(giveaway.id, first_end + chrono::Duration::hours(1))
        .await?;

    assert!(!second);
    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert_eq!(
        stored.end_time.map(|t| t.timestamp()),
        Some(first_end.timestamp())
    );

    Ok(())
}

/// Tests that a claim rolled back with its transaction leaves the giveaway open.
///
/// Expected: giveaway still open after rollback
#[tokio::test]
async fn rollback_reopens_claim() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_open_giveaway(db, "1").await?;

    let txn = db.begin().await?;
    assert!(GiveawayRepository::new(&txn)
        .claim_close(giveaway.id, Utc::now())
        .await?);
    txn.rollback().await?;

    let stored = GiveawayRepository::new(db).find_by_id(giveaway.id).await?.unwrap();
    assert!(stored.is_open());

    Ok(())
}

/// Tests claiming a giveaway that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_giveaway_is_not_claimed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let claimed = repo.claim_close(999, Utc::now()).await?;

    assert!(!claimed);

    Ok(())
}
