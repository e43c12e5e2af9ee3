use super::*;

/// Tests opening a giveaway in a guild without one.
///
/// Expected: Ok with an open giveaway for the guild
#[tokio::test]
async fn opens_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GiveawayService::new(
        db,
        mock_gateway(),
        Arc::new(MockVoucherClient::failing()),
    );
    let giveaway = service.ensure_open(1).await?;

    assert!(giveaway.is_open());
    assert_eq!(giveaway.guild_id, 1);

    Ok(())
}

/// Tests that an already open giveaway is returned as is.
///
/// Expected: Ok with the existing giveaway id on every call
#[tokio::test]
async fn already_open_is_success() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_open_giveaway(db, "1").await?;

    let service = GiveawayService::new(
        db,
        mock_gateway(),
        Arc::new(MockVoucherClient::failing()),
    );
    let first = service.ensure_open(1).await?;
    let second = service.ensure_open(1).await?;

    assert_eq!(first.id, existing.id);
    assert_eq!(second.id, existing.id);

    Ok(())
}
