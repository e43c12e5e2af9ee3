use super::*;

/// Tests storing a template with surrounding whitespace.
///
/// Expected: stored trimmed and listed for the guild
#[tokio::test]
async fn stores_trimmed_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StatusService::new(db, mock_gateway());
    let template = service.add_template(1, "  {entries} entries so far  ").await?;

    assert_eq!(template.content, "{entries} entries so far");
    assert_eq!(template.last_posted_at, None);
    assert_eq!(service.list_templates(1).await?, vec![template]);

    Ok(())
}

/// Tests refusing blank and oversized templates.
///
/// Expected: Err(StatusTemplateErr) and nothing stored
#[tokio::test]
async fn refuses_blank_and_oversized() -> Result<(), AppError> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StatusService::new(db, mock_gateway());

    assert!(matches!(
        service.add_template(1, "   ").await,
        Err(AppError::StatusTemplateErr(StatusTemplateError::Empty))
    ));
    assert!(matches!(
        service.add_template(1, &"x".repeat(MAX_TEMPLATE_LEN + 1)).await,
        Err(AppError::StatusTemplateErr(StatusTemplateError::TooLong { .. }))
    ));
    assert!(service.list_templates(1).await?.is_empty());

    Ok(())
}
