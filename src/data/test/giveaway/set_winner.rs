use super::*;

/// Tests recording a winner and announcement message.
///
/// Expected: winner fields, code and info_message_id stored and queryable by the
/// announcement message
#[tokio::test]
async fn records_winner_and_announcement() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_open_giveaway(db, "1").await?;

    let repo = GiveawayRepository::new(db);
    repo.claim_close(giveaway.id, Utc::now()).await?;
    repo.set_winner(
        giveaway.id,
        GiveawayWinnerParam {
            winner_id: 42,
            winner_name: "Winner".to_string(),
            code: "CODE-1".to_string(),
        },
    )
    .await?;
    repo.set_info_message_id(giveaway.id, 900).await?;

    let stored = repo.find_by_info_message_id(900).await?.unwrap();
    assert_eq!(stored.id, giveaway.id);
    assert_eq!(stored.winner_id, Some(42));
    assert_eq!(stored.winner_name.as_deref(), Some("Winner"));
    assert_eq!(stored.code.as_deref(), Some("CODE-1"));
    assert_eq!(stored.info_message_id, Some(900));

    Ok(())
}

/// Tests looking up an unknown announcement message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_announcement_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let result = repo.find_by_info_message_id(12345).await?;

    assert!(result.is_none());

    Ok(())
}
