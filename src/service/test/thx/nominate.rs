use super::*;

fn nominate_param(candidate: MemberInfo, approver: MemberInfo) -> NominateParam {
    NominateParam {
        guild_id: 1,
        channel_id: 500,
        candidate,
        approver,
    }
}

/// Tests creating a nomination.
///
/// Expected: Ok(NominationOutcome::Created) with a pending row, posted message and reactions
#[tokio::test]
async fn creates_pending_nomination() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    let outcome = ThxService::new(db, gateway.clone())
        .nominate(nominate_param(member(20, "Dana"), member(21, "Eve")))
        .await?;

    let NominationOutcome::Created(candidate) = outcome else {
        panic!("expected a created nomination, got {:?}", outcome);
    };
    assert_eq!(candidate.candidate_id, 20);
    assert_eq!(candidate.approver_id, 21);
    assert_eq!(candidate.state, ThxState::Pending);

    let posted = gateway.sent_to(500);
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].message_id, candidate.message_id);
    assert_eq!(gateway.reactions_added().len(), 2);

    // Nominations do not open a giveaway until accepted
    assert!(GiveawayRepository::new(db).find_open(1).await?.is_none());

    Ok(())
}

/// Tests nominating yourself as approver.
///
/// Expected: Ok(NominationOutcome::Refused(SelfThx))
#[tokio::test]
async fn refuses_self_approval() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    let outcome = ThxService::new(db, gateway.clone())
        .nominate(nominate_param(member(20, "Dana"), member(20, "Dana")))
        .await?;

    assert_eq!(outcome, NominationOutcome::Refused(ThxRejection::SelfThx));
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests naming a bot as approver.
///
/// Expected: Ok(NominationOutcome::Refused(BotTarget))
#[tokio::test]
async fn refuses_bot_approver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = MemberInfo {
        is_bot: true,
        ..member(99, "Bot")
    };
    let outcome = ThxService::new(db, mock_gateway())
        .nominate(nominate_param(member(20, "Dana"), bot))
        .await?;

    assert_eq!(outcome, NominationOutcome::Refused(ThxRejection::BotTarget));

    Ok(())
}

/// Tests a blacklisted candidate.
///
/// Expected: Ok(NominationOutcome::Refused(Blacklisted))
#[tokio::test]
async fn refuses_blacklisted_candidate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklist_entry(db, "1", "20").await?;

    let outcome = ThxService::new(db, mock_gateway())
        .nominate(nominate_param(member(20, "Dana"), member(21, "Eve")))
        .await?;

    assert_eq!(outcome, NominationOutcome::Refused(ThxRejection::Blacklisted));

    Ok(())
}
