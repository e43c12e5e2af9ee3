use super::*;

/// Tests removing a listed user.
///
/// Expected: Ok(true) and user no longer listed
#[tokio::test]
async fn removes_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklist_entry(db, "1", "42").await?;

    let repo = BlacklistRepository::new(db);
    let removed = repo.remove(BlacklistKind::Thx, 1, 42).await?;

    assert!(removed);
    assert!(!repo.contains(BlacklistKind::Thx, 1, 42).await?);

    Ok(())
}

/// Tests removing a user that is not listed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_entry_returns_false() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);

    assert!(!repo.remove(BlacklistKind::Helper, 1, 42).await?);

    Ok(())
}
