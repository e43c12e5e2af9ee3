use super::*;

/// Tests a guild-wide recompute.
///
/// Member 10 qualifies, member 11 holds the role without qualifying, member 12 is
/// neither. Bots are skipped.
///
/// Expected: 1 granted, 1 revoked, 1 unchanged
#[tokio::test]
async fn syncs_every_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    setup_member(&gateway, 10, Vec::new());
    setup_member(&gateway, 11, vec![HELPER_ROLE]);
    setup_member(&gateway, 12, Vec::new());
    gateway.add_bot(1, 99, "Bot");

    ServerConfigFactory::new(db, "1")
        .helper_role("60", 1)
        .build()
        .await?;
    let giveaway = factory::create_open_giveaway(db, "1").await?;
    factory::create_participant(db, &giveaway, "10", Some(true)).await?;
    factory::create_participant(db, &giveaway, "99", Some(true)).await?;

    let summary = HelperService::new(db, gateway.clone())
        .recompute_all_helpers(1)
        .await?;

    assert_eq!(summary.granted, 1);
    assert_eq!(summary.revoked, 1);
    assert_eq!(summary.unchanged, 1);
    assert!(gateway.member_roles(1, 99).is_empty());

    Ok(())
}

/// Tests a guild-wide recompute without a helper role.
///
/// Expected: empty summary
#[tokio::test]
async fn disabled_guild_is_skipped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = mock_gateway();
    setup_member(&gateway, 10, Vec::new());

    let summary = HelperService::new(db, gateway.clone())
        .recompute_all_helpers(1)
        .await?;

    assert_eq!(summary, Default::default());
    assert!(gateway.role_grants().is_empty());

    Ok(())
}
