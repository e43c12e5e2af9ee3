use super::*;

/// Tests creating a nomination.
///
/// Expected: pending nomination with the approver fixed
#[tokio::test]
async fn creates_pending_nomination() -> Result<(), AppError> {
    let test = TestBuilder::new().with_thx_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipantCandidateRepository::new(db);
    let candidate = repo
        .create(CreateCandidateParam {
            guild_id: 1,
            candidate_id: 42,
            candidate_name: "Alice".to_string(),
            approver_id: 7,
            approver_name: "Bob".to_string(),
            channel_id: 500,
            message_id: 800,
        })
        .await?;

    assert_eq!(candidate.state, ThxState::Pending);
    assert!(!candidate.is_resolved());

    let found = repo.find_by_message_id(800).await?.unwrap();
    assert_eq!(found.id, candidate.id);
    assert_eq!(found.approver_id, 7);
    assert_eq!(found.candidate_id, 42);

    Ok(())
}
