use super::*;

/// Tests adding a user to the thx blacklist.
///
/// Expected: Ok(true), user listed only on the thx list
#[tokio::test]
async fn adds_to_selected_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    let added = repo.add(BlacklistKind::Thx, 1, 42, 9).await?;

    assert!(added);
    assert!(repo.contains(BlacklistKind::Thx, 1, 42).await?);
    assert!(!repo.contains(BlacklistKind::Helper, 1, 42).await?);
    assert!(!repo.contains(BlacklistKind::Thx, 2, 42).await?);

    let entries = repo.list(BlacklistKind::Thx, 1).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].blacklisted_by_id, 9);

    Ok(())
}

/// Tests adding a user that is already listed.
///
/// Expected: Ok(false) with no duplicate row
#[tokio::test]
async fn duplicate_add_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_helper_blacklist_entry(db, "1", "42").await?;

    let repo = BlacklistRepository::new(db);
    let added = repo.add(BlacklistKind::Helper, 1, 42, 9).await?;

    assert!(!added);
    assert_eq!(repo.list(BlacklistKind::Helper, 1).await?.len(), 1);

    Ok(())
}
