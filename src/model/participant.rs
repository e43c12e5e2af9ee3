//! Domain models for thx entries.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::{parse_optional_snowflake, parse_snowflake};

/// Moderation state of a thx entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThxState {
    Pending,
    Accepted,
    Rejected,
}

impl ThxState {
    /// Maps the nullable `is_accepted` column onto a state.
    pub fn from_column(is_accepted: Option<bool>) -> Self {
        match is_accepted {
            None => ThxState::Pending,
            Some(true) => ThxState::Accepted,
            Some(false) => ThxState::Rejected,
        }
    }
}

/// A thx entry: one user thanked in one giveaway cycle.
///
/// Only accepted participants can win and only they count toward helper status. Rows are
/// never deleted; rejection flips the state to `Rejected`.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub giveaway_id: i32,
    pub guild_id: u64,
    /// Discord ID of the thanked user.
    pub user_id: u64,
    /// Display name of the thanked user at thx time.
    pub user_name: String,
    /// Channel holding the thx message.
    pub channel_id: u64,
    /// The thx message carrying the moderation controls.
    pub message_id: u64,
    pub state: ThxState,
    /// Moderator who last accepted or rejected the entry.
    pub accept_user_id: Option<u64>,
    pub accept_user_name: Option<String>,
    pub accept_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Converts an entity model to a participant domain model at the repository boundary.
    pub fn from_entity(entity: entity::participant::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            giveaway_id: entity.giveaway_id,
            guild_id: parse_snowflake(entity.guild_id)?,
            user_id: parse_snowflake(entity.user_id)?,
            user_name: entity.user_name,
            channel_id: parse_snowflake(entity.channel_id)?,
            message_id: parse_snowflake(entity.message_id)?,
            state: ThxState::from_column(entity.is_accepted),
            accept_user_id: parse_optional_snowflake(entity.accept_user_id)?,
            accept_user_name: entity.accept_user_name,
            accept_time: entity.accept_time,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording a new pending thx entry.
#[derive(Debug, Clone)]
pub struct CreateParticipantParam {
    pub giveaway_id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub user_name: String,
    pub channel_id: u64,
    pub message_id: u64,
}

/// Moderator identity recorded on a thx transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Moderator {
    pub user_id: u64,
    pub name: String,
}

/// Why a thx or nomination request was refused before anything was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThxRejection {
    /// The actor tried to thank themselves.
    SelfThx,
    /// The target is an automated account.
    BotTarget,
    /// The target is on the guild blacklist.
    Blacklisted,
}

/// Result of recording a direct thx.
#[derive(Debug, Clone, PartialEq)]
pub enum ThxOutcome {
    Recorded(Participant),
    Refused(ThxRejection),
}

/// Result of a moderator acting on a thx entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ThxResolution {
    /// The state changed and side effects ran.
    Resolved(Participant),
    /// The entry already had the requested state.
    Unchanged,
    /// The actor is not a moderator; dispatch reverts their reaction.
    NotAllowed,
    /// The entry belongs to a closed giveaway and is frozen.
    GiveawayClosed,
    /// No thx entry exists for the message.
    NotFound,
}
