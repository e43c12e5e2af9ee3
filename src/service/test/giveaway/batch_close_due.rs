use super::*;

/// Tests that one failing guild does not stop the batch.
///
/// Guild 1 has no accepted entries and closes without a code. Guild 2 needs a code but
/// the voucher service fails, so its giveaway stays open.
///
/// Expected: one closed, one failed, and both guilds end with an open giveaway
#[tokio::test]
async fn continues_past_failing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_open_giveaway(db, "1").await?;
    let second = factory::create_open_giveaway(db, "2").await?;
    factory::create_participant(db, &second, "20", Some(true)).await?;

    let report = GiveawayService::new(
        db,
        mock_gateway(),
        Arc::new(MockVoucherClient::failing()),
    )
    .batch_close_due()
    .await?;

    assert_eq!(report.closed, 1);
    assert_eq!(report.failed, 1);

    let repo = GiveawayRepository::new(db);
    let reopened = repo.find_open(1).await?.unwrap();
    assert_ne!(reopened.id, first.id);
    let kept = repo.find_open(2).await?.unwrap();
    assert_eq!(kept.id, second.id);

    Ok(())
}

/// Tests a batch with no open giveaways.
///
/// Expected: empty report
#[tokio::test]
async fn nothing_due() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1"]));

    let report = GiveawayService::new(db, mock_gateway(), voucher.clone())
        .batch_close_due()
        .await?;

    assert_eq!(report.closed, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(voucher.calls(), 0);

    Ok(())
}
