//! Domain models for guild deny-lists.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// Which deny-list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlacklistKind {
    /// Blocks thx and nominations for the user.
    Thx,
    /// Blocks the helper role regardless of accepted thx count.
    Helper,
}

/// A user on one of a guild's deny-lists.
#[derive(Debug, Clone, PartialEq)]
pub struct BlacklistEntry {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    /// Administrator who added the entry.
    pub blacklisted_by_id: u64,
    pub created_at: DateTime<Utc>,
}

impl BlacklistEntry {
    pub fn from_blacklist(entity: entity::blacklist::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(entity.guild_id)?,
            user_id: parse_snowflake(entity.user_id)?,
            blacklisted_by_id: parse_snowflake(entity.blacklisted_by_id)?,
            created_at: entity.created_at,
        })
    }

    pub fn from_helper_blacklist(entity: entity::helper_blacklist::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(entity.guild_id)?,
            user_id: parse_snowflake(entity.user_id)?,
            blacklisted_by_id: parse_snowflake(entity.blacklisted_by_id)?,
            created_at: entity.created_at,
        })
    }
}
