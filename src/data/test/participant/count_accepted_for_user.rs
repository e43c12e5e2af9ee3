use super::*;
use chrono::Utc;

/// Tests counting accepted thx across every giveaway of a guild.
///
/// Verifies closed cycles still count and other guilds and non-accepted states do not.
///
/// Expected: count of 2
#[tokio::test]
async fn counts_accepted_across_cycles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let closed = factory::giveaway::GiveawayFactory::new(db, "1")
        .closed(Utc::now())
        .build()
        .await?;
    let open = factory::create_open_giveaway(db, "1").await?;
    let elsewhere = factory::create_open_giveaway(db, "2").await?;

    factory::create_participant(db, &closed, "42", Some(true)).await?;
    factory::create_participant(db, &open, "42", Some(true)).await?;
    factory::create_participant(db, &open, "42", None).await?;
    factory::create_participant(db, &open, "42", Some(false)).await?;
    factory::create_participant(db, &elsewhere, "42", Some(true)).await?;

    let repo = ParticipantRepository::new(db);
    let count = repo.count_accepted_for_user(1, 42).await?;

    assert_eq!(count, 2);

    Ok(())
}
