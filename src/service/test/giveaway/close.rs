use super::*;

/// Tests closing a guild without an open giveaway.
///
/// Expected: Ok(CloseOutcome::NothingToClose) with no voucher call
#[tokio::test]
async fn nothing_to_close() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1"]));

    let outcome = GiveawayService::new(db, gateway.clone(), voucher.clone())
        .close(1)
        .await?;

    assert_eq!(outcome, CloseOutcome::NothingToClose);
    assert_eq!(voucher.calls(), 0);
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests closing a giveaway whose entries are all pending or rejected.
///
/// Verifies the close commits without a winner, no code is requested and the
/// "no winner" announcement is posted and recorded.
///
/// Expected: Ok(CloseOutcome::NoWinner) with zero voucher calls
#[tokio::test]
async fn empty_pool_closes_without_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1"]));

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("700")
        .build()
        .await?;
    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", None).await?;
    factory::create_participant(db, &giveaway, "11", Some(false)).await?;

    let outcome = GiveawayService::new(db, gateway.clone(), voucher.clone())
        .close(1)
        .await?;

    assert_eq!(
        outcome,
        CloseOutcome::NoWinner {
            giveaway_id: giveaway.id
        }
    );
    assert_eq!(voucher.calls(), 0);

    let announcements = gateway.sent_to(700);
    assert_eq!(announcements.len(), 1);

    let stored = GiveawayRepository::new(db)
        .find_by_id(giveaway.id)
        .await?
        .unwrap();
    assert!(!stored.is_open());
    assert!(stored.winner_id.is_none());
    assert_eq!(stored.info_message_id, Some(announcements[0].message_id));

    Ok(())
}

/// Tests that only accepted entries can win.
///
/// A is accepted, B is pending and C is rejected, so A is the only possible winner.
///
/// Expected: Ok(CloseOutcome::Won) for A with the code stored and delivered by DM
#[tokio::test]
async fn only_accepted_participant_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1"]));

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("700")
        .build()
        .await?;
    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", Some(true)).await?;
    factory::create_participant(db, &giveaway, "11", None).await?;
    factory::create_participant(db, &giveaway, "12", Some(false)).await?;

    let outcome = GiveawayService::new(db, gateway.clone(), voucher.clone())
        .close(1)
        .await?;

    assert_eq!(
        outcome,
        CloseOutcome::Won {
            giveaway_id: giveaway.id,
            winner_id: 10,
            code_delivered: true,
        }
    );
    assert_eq!(voucher.calls(), 1);

    let stored = GiveawayRepository::new(db)
        .find_by_id(giveaway.id)
        .await?
        .unwrap();
    assert!(!stored.is_open());
    assert_eq!(stored.winner_id, Some(10));
    assert_eq!(stored.code.as_deref(), Some("CODE-1"));

    let dms = gateway.direct_messages();
    assert_eq!(dms.len(), 1);
    assert_eq!(dms[0].user_id, 10);

    Ok(())
}

/// Tests that a voucher failure rolls the close back.
///
/// Expected: Err(AppError::Voucher) with the giveaway still open and nothing announced
#[tokio::test]
async fn voucher_failure_keeps_giveaway_open() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    let voucher = Arc::new(MockVoucherClient::failing());

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("700")
        .build()
        .await?;
    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", Some(true)).await?;

    let result = GiveawayService::new(db, gateway.clone(), voucher.clone())
        .close(1)
        .await;

    assert!(matches!(result, Err(AppError::Voucher(_))));
    assert_eq!(voucher.calls(), 1);
    assert!(gateway.sent().is_empty());

    let stored = GiveawayRepository::new(db)
        .find_by_id(giveaway.id)
        .await?
        .unwrap();
    assert!(stored.is_open());
    assert!(stored.winner_id.is_none());
    assert!(stored.code.is_none());

    Ok(())
}

/// Tests that a failed code DM is reported without undoing the close.
///
/// Expected: Ok(CloseOutcome::Won) with code_delivered false and the code stored
#[tokio::test]
async fn failed_dm_keeps_close() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    gateway.fail_direct_messages();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1"]));

    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", Some(true)).await?;

    let outcome = GiveawayService::new(db, gateway.clone(), voucher)
        .close(1)
        .await?;

    assert_eq!(
        outcome,
        CloseOutcome::Won {
            giveaway_id: giveaway.id,
            winner_id: 10,
            code_delivered: false,
        }
    );

    let stored = GiveawayRepository::new(db)
        .find_by_id(giveaway.id)
        .await?
        .unwrap();
    assert_eq!(stored.code.as_deref(), Some("CODE-1"));

    Ok(())
}

/// Tests two closes of the same giveaway started together.
///
/// The in-memory test database has a single connection, so the second close waits for
/// the first transaction to commit and then finds nothing open. The claim race itself
/// is covered by the repository `claim_close` tests.
///
/// Expected: exactly one Won outcome, one voucher call and one DM
#[tokio::test]
async fn joined_closes_commit_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1", "CODE-2"]));

    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", Some(true)).await?;
    factory::create_participant(db, &giveaway, "11", Some(true)).await?;

    let service = GiveawayService::new(db, gateway.clone(), voucher.clone());
    let (first, second) = tokio::join!(service.close(1), service.close(1));
    let outcomes = [first?, second?];

    let won = outcomes
        .iter()
        .filter(|o| matches!(o, CloseOutcome::Won { .. }))
        .count();
    assert_eq!(won, 1);
    assert!(outcomes.iter().all(|o| matches!(
        o,
        CloseOutcome::Won { .. } | CloseOutcome::AlreadyClosed | CloseOutcome::NothingToClose
    )));
    assert_eq!(voucher.calls(), 1);
    assert_eq!(gateway.direct_messages().len(), 1);

    Ok(())
}

/// Tests that a closed giveaway is never closed again.
///
/// Expected: Ok(CloseOutcome::NothingToClose) on the second close
#[tokio::test]
async fn second_close_finds_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    let voucher = Arc::new(MockVoucherClient::with_codes(&["CODE-1", "CODE-2"]));

    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", Some(true)).await?;

    let service = GiveawayService::new(db, gateway, voucher.clone());
    service.close(1).await?;
    let second = service.close(1).await?;

    assert_eq!(second, CloseOutcome::NothingToClose);
    assert_eq!(voucher.calls(), 1);

    Ok(())
}
