//! Domain models for thx nominations.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::participant::{Participant, ThxRejection, ThxState},
    util::parse::parse_snowflake,
};

/// A nomination: the candidate asks the approver to thank them.
///
/// The approver is fixed at creation. Only the approver can resolve the nomination, and
/// both resolutions are terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantCandidate {
    pub id: i32,
    pub guild_id: u64,
    pub candidate_id: u64,
    pub candidate_name: String,
    pub approver_id: u64,
    pub approver_name: String,
    pub channel_id: u64,
    pub message_id: u64,
    pub state: ThxState,
    pub accept_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ParticipantCandidate {
    /// Converts an entity model to a candidate domain model at the repository boundary.
    pub fn from_entity(entity: entity::participant_candidate::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(entity.guild_id)?,
            candidate_id: parse_snowflake(entity.candidate_id)?,
            candidate_name: entity.candidate_name,
            approver_id: parse_snowflake(entity.candidate_approver_id)?,
            approver_name: entity.candidate_approver_name,
            channel_id: parse_snowflake(entity.channel_id)?,
            message_id: parse_snowflake(entity.message_id)?,
            state: ThxState::from_column(entity.is_accepted),
            accept_time: entity.accept_time,
            created_at: entity.created_at,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.state != ThxState::Pending
    }
}

/// Parameters for recording a new nomination.
#[derive(Debug, Clone)]
pub struct CreateCandidateParam {
    pub guild_id: u64,
    pub candidate_id: u64,
    pub candidate_name: String,
    pub approver_id: u64,
    pub approver_name: String,
    pub channel_id: u64,
    pub message_id: u64,
}

/// Result of creating a nomination.
#[derive(Debug, Clone, PartialEq)]
pub enum NominationOutcome {
    Created(ParticipantCandidate),
    Refused(ThxRejection),
}

/// Result of a reaction on a nomination message.
#[derive(Debug, Clone, PartialEq)]
pub enum NominationResolution {
    /// Accepted; the candidate is now a pending participant of the open giveaway.
    Accepted {
        candidate: ParticipantCandidate,
        participant: Participant,
    },
    /// Rejected; terminal with no further effect.
    Rejected(ParticipantCandidate),
    /// The nomination was already accepted or rejected.
    AlreadyResolved,
    /// The reacting user is not the approver; dispatch reverts their reaction.
    NotApprover,
    /// No nomination exists for the message.
    NotFound,
}
