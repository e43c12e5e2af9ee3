use super::*;

/// Tests creating settings on first contact.
///
/// Expected: defaults with every channel and role unset
#[tokio::test]
async fn creates_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerConfigRepository::new(db);
    let config = repo.get_or_create(1).await?;

    assert_eq!(config.guild_id, 1);
    assert_eq!(config.helper_threshold, DEFAULT_HELPER_THRESHOLD);
    assert!(config.admin_role_id.is_none());
    assert!(config.thx_info_channel_id.is_none());
    assert!(config.helper_role_id.is_none());

    Ok(())
}

/// Tests that existing settings are returned unchanged.
///
/// Expected: stored row returned
#[tokio::test]
async fn returns_existing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::server_config::ServerConfigFactory::new(db, "1")
        .helper_role("77", 3)
        .build()
        .await?;

    let repo = ServerConfigRepository::new(db);
    let config = repo.get_or_create(1).await?;

    assert_eq!(config.id, stored.id);
    assert_eq!(config.helper_role_id, Some(77));
    assert_eq!(config.helper_threshold, 3);

    Ok(())
}
