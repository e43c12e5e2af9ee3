use super::*;

/// Tests that a never-posted template goes before every posted one.
///
/// Expected: the unposted template, then the one posted longest ago
#[tokio::test]
async fn unposted_template_goes_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let recent = factory::create_status_template(db, "1", "recent", Some(now)).await?;
    let older =
        factory::create_status_template(db, "1", "older", Some(now - Duration::hours(2))).await?;
    let fresh = factory::create_status_template(db, "1", "fresh", None).await?;

    let repo = StatusTemplateRepository::new(db);
    assert_eq!(repo.next_in_rotation(1).await?.unwrap().id, fresh.id);

    repo.mark_posted(fresh.id, now + Duration::seconds(1)).await?;
    assert_eq!(repo.next_in_rotation(1).await?.unwrap().id, older.id);

    repo.mark_posted(older.id, now + Duration::seconds(2)).await?;
    assert_eq!(repo.next_in_rotation(1).await?.unwrap().id, recent.id);

    Ok(())
}

/// Tests that unposted templates rotate in insertion order.
///
/// Expected: lowest id first
#[tokio::test]
async fn ties_fall_back_to_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_status_template(db, "1", "first", None).await?;
    factory::create_status_template(db, "1", "second", None).await?;

    let next = StatusTemplateRepository::new(db).next_in_rotation(1).await?;

    assert_eq!(next.unwrap().id, first.id);

    Ok(())
}

/// Tests a guild without templates.
///
/// Expected: Ok(None), other guilds' templates ignored
#[tokio::test]
async fn none_without_templates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_status_template(db, "2", "elsewhere", None).await?;

    let repo = StatusTemplateRepository::new(db);
    assert!(repo.next_in_rotation(1).await?.is_none());
    assert_eq!(repo.guild_ids().await?, vec![2]);

    Ok(())
}
