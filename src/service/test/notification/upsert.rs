use super::*;

/// Tests mirroring in a guild without a thx-info channel.
///
/// Expected: Ok(None) and nothing sent
#[tokio::test]
async fn no_channel_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    let result = ThxNotificationService::new(db, gateway.clone())
        .upsert(1, 700, OutboundMessage::text("wait"))
        .await?;

    assert_eq!(result, None);
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests that the first transition posts and later ones edit in place.
///
/// Expected: one message sent, one edit, same mirror id both times
#[tokio::test]
async fn edits_existing_mirror() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .thx_info_channel_id("800")
        .build()
        .await?;

    let service = ThxNotificationService::new(db, gateway.clone());
    let first = service
        .upsert(1, 700, OutboundMessage::text("wait"))
        .await?;
    let second = service
        .upsert(1, 700, OutboundMessage::text("confirm"))
        .await?;

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(gateway.sent_to(800).len(), 1);

    let edits = gateway.edits();
    assert_eq!(edits.len(), 1);
    assert_eq!(Some(edits[0].message_id), first);
    assert_eq!(edits[0].message, OutboundMessage::text("confirm"));

    Ok(())
}

/// Tests replacing a mirror that can no longer be edited.
///
/// Expected: a new mirror message with the stored mapping updated
#[tokio::test]
async fn reposts_when_edit_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .thx_info_channel_id("800")
        .build()
        .await?;

    let service = ThxNotificationService::new(db, gateway.clone());
    let first = service
        .upsert(1, 700, OutboundMessage::text("wait"))
        .await?
        .unwrap();

    gateway.fail_edits();
    let second = service
        .upsert(1, 700, OutboundMessage::text("confirm"))
        .await?
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(gateway.sent_to(800).len(), 2);

    let stored = ThxNotificationRepository::new(db)
        .find_by_message_id(700)
        .await?
        .unwrap();
    assert_eq!(stored.notification_message_id, second);

    Ok(())
}
