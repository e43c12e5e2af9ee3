//! Factory for thx nominations awaiting an approver's decision.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participant candidates.
pub struct ParticipantCandidateFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    candidate_id: String,
    approver_id: String,
    message_id: String,
    is_accepted: Option<bool>,
}

impl<'a> ParticipantCandidateFactory<'a> {
    /// Creates a new factory for a pending nomination of `candidate_id` by `approver_id`.
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        candidate_id: impl Into<String>,
        approver_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            candidate_id: candidate_id.into(),
            approver_id: approver_id.into(),
            message_id: next_id().to_string(),
            is_accepted: None,
        }
    }

    /// Sets the nomination message ID.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the resolution state.
    pub fn accepted(mut self, is_accepted: Option<bool>) -> Self {
        self.is_accepted = is_accepted;
        self
    }

    /// Builds and inserts the candidate entity into the database.
    pub async fn build(self) -> Result<entity::participant_candidate::Model, DbErr> {
        let now = Utc::now();

        entity::participant_candidate::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            candidate_name: ActiveValue::Set(format!("User {}", self.candidate_id)),
            candidate_id: ActiveValue::Set(self.candidate_id),
            candidate_approver_name: ActiveValue::Set(format!("User {}", self.approver_id)),
            candidate_approver_id: ActiveValue::Set(self.approver_id),
            channel_id: ActiveValue::Set("500".to_string()),
            message_id: ActiveValue::Set(self.message_id),
            accept_time: ActiveValue::Set(self.is_accepted.map(|_| now)),
            is_accepted: ActiveValue::Set(self.is_accepted),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending nomination with a specific message ID.
pub async fn create_candidate(
    db: &DatabaseConnection,
    guild_id: &str,
    candidate_id: &str,
    approver_id: &str,
    message_id: &str,
) -> Result<entity::participant_candidate::Model, DbErr> {
    ParticipantCandidateFactory::new(db, guild_id, candidate_id, approver_id)
        .message_id(message_id)
        .build()
        .await
}
