use super::*;

/// Tests recording a thx in a guild without an open giveaway.
///
/// Verifies a giveaway is opened, the thx message gets moderation buttons and both
/// decision reactions, and the pending entry is mirrored to the thx-info channel.
///
/// Expected: Ok(ThxOutcome::Recorded) with a pending participant
#[tokio::test]
async fn records_pending_thx() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .thx_info_channel_id("800")
        .build()
        .await?;

    let outcome = ThxService::new(db, gateway.clone())
        .record_thx(thx_param(member(10, "Alice"), member(11, "Bob")))
        .await?;

    let ThxOutcome::Recorded(participant) = outcome else {
        panic!("expected a recorded thx, got {:?}", outcome);
    };
    assert_eq!(participant.user_id, 11);
    assert_eq!(participant.user_name, "Bob");
    assert_eq!(participant.state, ThxState::Pending);

    let giveaway = GiveawayRepository::new(db).find_open(1).await?.unwrap();
    assert_eq!(participant.giveaway_id, giveaway.id);

    let posted = gateway.sent_to(500);
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].message_id, participant.message_id);
    assert_eq!(posted[0].message.buttons.len(), 2);

    let reactions: Vec<String> = gateway
        .reactions_added()
        .into_iter()
        .filter(|(message_id, _)| *message_id == participant.message_id)
        .map(|(_, emoji)| emoji)
        .collect();
    assert_eq!(reactions, vec!["✅".to_string(), "❌".to_string()]);

    assert_eq!(gateway.sent_to(800).len(), 1);

    Ok(())
}

/// Tests that a user cannot thank themselves.
///
/// Expected: Ok(ThxOutcome::Refused(SelfThx)) with nothing posted or stored
#[tokio::test]
async fn refuses_self_thx() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    let outcome = ThxService::new(db, gateway.clone())
        .record_thx(thx_param(member(10, "Alice"), member(10, "Alice")))
        .await?;

    assert_eq!(outcome, ThxOutcome::Refused(ThxRejection::SelfThx));
    assert!(gateway.sent().is_empty());
    assert!(GiveawayRepository::new(db).find_open(1).await?.is_none());

    Ok(())
}

/// Tests that bots cannot be thanked.
///
/// Expected: Ok(ThxOutcome::Refused(BotTarget))
#[tokio::test]
async fn refuses_bot_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    let bot = MemberInfo {
        is_bot: true,
        ..member(99, "Bot")
    };
    let outcome = ThxService::new(db, gateway.clone())
        .record_thx(thx_param(member(10, "Alice"), bot))
        .await?;

    assert_eq!(outcome, ThxOutcome::Refused(ThxRejection::BotTarget));
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests that blacklisted users cannot be thanked.
///
/// Expected: Ok(ThxOutcome::Refused(Blacklisted))
#[tokio::test]
async fn refuses_blacklisted_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    factory::create_blacklist_entry(db, "1", "11").await?;

    let outcome = ThxService::new(db, gateway.clone())
        .record_thx(thx_param(member(10, "Alice"), member(11, "Bob")))
        .await?;

    assert_eq!(outcome, ThxOutcome::Refused(ThxRejection::Blacklisted));
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests that a second thx joins the already open giveaway.
///
/// Expected: both participants share the giveaway and no mirror is sent without a channel
#[tokio::test]
async fn joins_open_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    let giveaway = factory::create_open_giveaway(db, "1").await?;

    let service = ThxService::new(db, gateway.clone());
    let first = service
        .record_thx(thx_param(member(10, "Alice"), member(11, "Bob")))
        .await?;
    let second = service
        .record_thx(thx_param(member(12, "Carol"), member(11, "Bob")))
        .await?;

    for outcome in [first, second] {
        let ThxOutcome::Recorded(participant) = outcome else {
            panic!("expected a recorded thx");
        };
        assert_eq!(participant.giveaway_id, giveaway.id);
    }
    assert_eq!(gateway.sent().len(), 2);

    Ok(())
}
