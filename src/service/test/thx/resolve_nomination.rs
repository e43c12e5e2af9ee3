use super::*;

/// Tests the approver accepting a nomination.
///
/// Verifies the candidate enters the open giveaway as a pending participant through the
/// same path as a direct thx.
///
/// Expected: Ok(NominationResolution::Accepted) with a pending participant
#[tokio::test]
async fn approver_accepts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    factory::create_candidate(db, "1", "20", "21", "600").await?;

    let resolution = ThxService::new(db, gateway.clone())
        .resolve_nomination(600, 21, Decision::Accept)
        .await?;

    let NominationResolution::Accepted {
        candidate,
        participant,
    } = resolution
    else {
        panic!("expected an accepted nomination, got {:?}", resolution);
    };
    assert_eq!(candidate.state, ThxState::Accepted);
    assert!(candidate.accept_time.is_some());
    assert_eq!(participant.user_id, 20);
    assert_eq!(participant.state, ThxState::Pending);

    let giveaway = GiveawayRepository::new(db).find_open(1).await?.unwrap();
    assert_eq!(participant.giveaway_id, giveaway.id);

    // Nomination message edited, thx message posted
    assert_eq!(gateway.edits().len(), 1);
    assert_eq!(gateway.sent_to(500).len(), 1);

    Ok(())
}

/// Tests a reaction from someone other than the approver.
///
/// Expected: Ok(NominationResolution::NotApprover) with the nomination still pending
#[tokio::test]
async fn other_member_not_approver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_candidate(db, "1", "20", "21", "600").await?;

    let resolution = ThxService::new(db, mock_gateway())
        .resolve_nomination(600, 22, Decision::Accept)
        .await?;

    assert_eq!(resolution, NominationResolution::NotApprover);
    let stored = ParticipantCandidateRepository::new(db)
        .find_by_message_id(600)
        .await?
        .unwrap();
    assert_eq!(stored.state, ThxState::Pending);

    Ok(())
}

/// Tests that a rejected nomination ignores later reactions.
///
/// Expected: AlreadyResolved for the later accept, with no giveaway opened
#[tokio::test]
async fn rejection_is_terminal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    factory::create_candidate(db, "1", "20", "21", "600").await?;

    let service = ThxService::new(db, gateway.clone());
    let first = service
        .resolve_nomination(600, 21, Decision::Reject)
        .await?;
    let second = service
        .resolve_nomination(600, 21, Decision::Accept)
        .await?;

    assert!(matches!(
        first,
        NominationResolution::Rejected(ref c) if c.state == ThxState::Rejected
    ));
    assert_eq!(second, NominationResolution::AlreadyResolved);
    assert!(GiveawayRepository::new(db).find_open(1).await?.is_none());
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests that an accepted nomination creates exactly one participant.
///
/// Expected: AlreadyResolved for the repeated accept and a single participant
#[tokio::test]
async fn acceptance_is_terminal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_candidate(db, "1", "20", "21", "600").await?;

    let service = ThxService::new(db, mock_gateway());
    service
        .resolve_nomination(600, 21, Decision::Accept)
        .await?;
    let second = service
        .resolve_nomination(600, 21, Decision::Accept)
        .await?;
    let third = service
        .resolve_nomination(600, 21, Decision::Reject)
        .await?;

    assert_eq!(second, NominationResolution::AlreadyResolved);
    assert_eq!(third, NominationResolution::AlreadyResolved);

    let giveaway = GiveawayRepository::new(db).find_open(1).await?.unwrap();
    let participants = ParticipantRepository::new(db)
        .find_by_giveaway(giveaway.id)
        .await?;
    assert_eq!(participants.len(), 1);

    Ok(())
}

/// Tests a reaction on a message that is not a nomination.
///
/// Expected: Ok(NominationResolution::NotFound)
#[tokio::test]
async fn unknown_message_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resolution = ThxService::new(db, mock_gateway())
        .resolve_nomination(600, 21, Decision::Accept)
        .await?;

    assert_eq!(resolution, NominationResolution::NotFound);

    Ok(())
}

/// Tests an acceptance whose thx message cannot be posted.
///
/// Verifies the nomination returns to pending so the approver's next reaction still
/// creates the entry.
///
/// Expected: Err on the first accept, Accepted on the retry with one participant
#[tokio::test]
async fn failed_entry_keeps_nomination_retryable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    factory::create_candidate(db, "1", "20", "21", "600").await?;

    let service = ThxService::new(db, gateway.clone());

    gateway.fail_sends();
    let first = service.resolve_nomination(600, 21, Decision::Accept).await;
    assert!(first.is_err());

    let stored = ParticipantCandidateRepository::new(db)
        .find_by_message_id(600)
        .await?
        .unwrap();
    assert_eq!(stored.state, ThxState::Pending);
    assert!(stored.accept_time.is_none());
    // Nomination message keeps showing the request as pending
    assert!(gateway.edits().is_empty());

    gateway.resume_sends();
    let retry = service
        .resolve_nomination(600, 21, Decision::Accept)
        .await?;
    assert!(matches!(retry, NominationResolution::Accepted { .. }));

    let giveaway = GiveawayRepository::new(db).find_open(1).await?.unwrap();
    let participants = ParticipantRepository::new(db)
        .find_by_giveaway(giveaway.id)
        .await?;
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].user_id, 20);

    Ok(())
}
