use super::*;

use sea_orm::SqlErr;

/// Tests opening a second giveaway while one is open.
///
/// Expected: unique constraint violation, the first giveaway stays the open one
#[tokio::test]
async fn rejects_second_open_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let first = repo.create_open(1, Utc::now()).await?;
    let second = repo.create_open(1, Utc::now()).await;

    let err = second.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.find_open(1).await?.unwrap().id, first.id);

    Ok(())
}

/// Tests that closed cycles and other guilds don't block opening a giveaway.
///
/// Expected: Ok with a new open giveaway
#[tokio::test]
async fn opens_after_close_and_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let first = repo.create_open(1, Utc::now()).await?;
    assert!(repo.claim_close(first.id, Utc::now()).await?);

    let reopened = repo.create_open(1, Utc::now()).await?;
    let other_guild = repo.create_open(2, Utc::now()).await?;

    assert_ne!(reopened.id, first.id);
    assert_eq!(repo.find_open(1).await?.unwrap().id, reopened.id);
    assert_eq!(other_guild.guild_id, 2);

    Ok(())
}
