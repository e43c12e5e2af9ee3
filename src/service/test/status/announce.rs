use super::*;

/// Tests posting with an open giveaway.
///
/// Expected: figures substituted, posted to the giveaway channel, template marked posted
#[tokio::test]
async fn posts_rendered_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("500")
        .build()
        .await?;
    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "20", Some(true)).await?;
    factory::create_participant(db, &giveaway, "20", Some(true)).await?;
    factory::create_participant(db, &giveaway, "21", Some(true)).await?;
    factory::create_participant(db, &giveaway, "22", None).await?;
    factory::create_participant(db, &giveaway, "23", Some(false)).await?;
    let template =
        factory::create_status_template(db, "1", "{entries}/{participants}/{pending}", None)
            .await?;

    let service = StatusService::new(db, gateway.clone());
    let outcome = service.announce(1).await?;

    let sent = gateway.sent_to(500);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].message.content.as_deref(), Some("3/2/1"));
    assert_eq!(
        outcome,
        StatusOutcome::Posted {
            template_id: template.id,
            message_id: sent[0].message_id,
        }
    );
    assert!(service.list_templates(1).await?[0].last_posted_at.is_some());

    Ok(())
}

/// Tests that consecutive posts walk the rotation.
///
/// Expected: first, second, then first again
#[tokio::test]
async fn rotates_templates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("500")
        .build()
        .await?;
    factory::create_status_template(db, "1", "first", None).await?;
    factory::create_status_template(db, "1", "second", None).await?;

    let service = StatusService::new(db, gateway.clone());
    for _ in 0..3 {
        service.announce(1).await?;
    }

    let contents: Vec<Option<String>> = gateway
        .sent_to(500)
        .into_iter()
        .map(|s| s.message.content)
        .collect();
    assert_eq!(
        contents,
        vec![
            Some("first".to_string()),
            Some("second".to_string()),
            Some("first".to_string()),
        ]
    );

    Ok(())
}

/// Tests a failed send.
///
/// Expected: Err, and the same template is next on retry
#[tokio::test]
async fn failed_send_keeps_rotation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("500")
        .build()
        .await?;
    let first = factory::create_status_template(db, "1", "first", None).await?;
    factory::create_status_template(db, "1", "second", None).await?;

    let service = StatusService::new(db, gateway.clone());

    gateway.fail_sends();
    assert!(service.announce(1).await.is_err());

    gateway.resume_sends();
    let outcome = service.announce(1).await?;

    assert!(matches!(
        outcome,
        StatusOutcome::Posted { template_id, .. } if template_id == first.id
    ));

    Ok(())
}

/// Tests guilds that cannot post.
///
/// Expected: NoTemplates without templates, NoChannel without a giveaway channel
#[tokio::test]
async fn skips_without_templates_or_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    factory::create_server_config(db, "1").await?;

    let service = StatusService::new(db, gateway.clone());
    assert_eq!(service.announce(1).await?, StatusOutcome::NoTemplates);

    factory::create_status_template(db, "1", "hello", None).await?;
    assert_eq!(service.announce(1).await?, StatusOutcome::NoChannel);
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests the scheduled run across guilds.
///
/// Expected: one post for the configured guild, one skip for the other
#[tokio::test]
async fn announce_all_counts_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();

    ServerConfigFactory::new(db, "1")
        .giveaway_channel_id("500")
        .build()
        .await?;
    factory::create_status_template(db, "1", "one", None).await?;
    factory::create_status_template(db, "2", "two", None).await?;

    let report = StatusService::new(db, gateway.clone()).announce_all().await?;

    assert_eq!(report.posted, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(gateway.sent_to(500).len(), 1);

    Ok(())
}
