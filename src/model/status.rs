//! Domain models for status announcements.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// A text the bot posts to the giveaway channel in rotation.
///
/// The content may hold `{entries}`, `{pending}`, `{participants}` and `{since}`, which
/// are filled from the open giveaway when the template is posted.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTemplate {
    pub id: i32,
    pub guild_id: u64,
    pub content: String,
    pub last_posted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl StatusTemplate {
    pub fn from_entity(entity: entity::status_template::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(entity.guild_id)?,
            content: entity.content,
            last_posted_at: entity.last_posted_at,
            created_at: entity.created_at,
        })
    }
}

/// Figures substituted into a status template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFigures {
    /// Accepted entries of the open giveaway.
    pub entries: usize,
    /// Thx still waiting for a moderator.
    pub pending: usize,
    /// Distinct users holding at least one accepted entry.
    pub participants: usize,
    /// Start of the open giveaway, `None` when no cycle is open.
    pub since: Option<DateTime<Utc>>,
}

/// Result of one status announcement attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusOutcome {
    Posted { template_id: i32, message_id: u64 },
    /// The guild has no templates.
    NoTemplates,
    /// The guild has no giveaway channel to post in.
    NoChannel,
}

/// Summary of a scheduled status run across all guilds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBatchReport {
    pub posted: usize,
    /// Guilds with templates but no giveaway channel.
    pub skipped: usize,
    pub failed: usize,
}
