//! Domain models for giveaway cycles.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::{parse_optional_snowflake, parse_snowflake};

/// One giveaway cycle of a guild.
///
/// A giveaway is open while `end_time` is `None`. Closing fills `end_time` together with
/// the winner and code in a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Giveaway {
    /// Unique identifier for the giveaway.
    pub id: i32,
    /// Discord guild the giveaway runs in.
    pub guild_id: u64,
    /// When the cycle was opened.
    pub start_time: DateTime<Utc>,
    /// When the cycle was closed, `None` while open.
    pub end_time: Option<DateTime<Utc>>,
    /// Announcement message posted on close.
    pub info_message_id: Option<u64>,
    /// Discord ID of the drawn winner.
    pub winner_id: Option<u64>,
    /// Display name of the drawn winner at draw time.
    pub winner_name: Option<String>,
    /// Voucher code awarded to the winner.
    pub code: Option<String>,
    /// Tier tag for levelled giveaways, unused by thx cycles.
    pub level: Option<i32>,
}

impl Giveaway {
    /// Converts an entity model to a giveaway domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The converted giveaway
    /// - `Err(DbErr::Custom)` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::giveaway::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(entity.guild_id)?,
            start_time: entity.start_time,
            end_time: entity.end_time,
            info_message_id: parse_optional_snowflake(entity.info_message_id)?,
            winner_id: parse_optional_snowflake(entity.winner_id)?,
            winner_name: entity.winner_name,
            code: entity.code,
            level: entity.level,
        })
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Winner fields written when a giveaway is closed with a winner.
#[derive(Debug, Clone, PartialEq)]
pub struct GiveawayWinnerParam {
    pub winner_id: u64,
    pub winner_name: String,
    pub code: String,
}

/// Result of a single close attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    /// The guild had no open giveaway.
    NothingToClose,
    /// Another closer committed first; nothing was written.
    AlreadyClosed,
    /// Closed without a winner because nobody had an accepted thx.
    NoWinner { giveaway_id: i32 },
    /// Closed with a winner. `code_delivered` is false when the direct message failed
    /// and the code needs a manual resend.
    Won {
        giveaway_id: i32,
        winner_id: u64,
        code_delivered: bool,
    },
}

/// Summary of a scheduled batch close across all guilds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Guilds whose giveaway was closed, with or without a winner.
    pub closed: usize,
    /// Guilds where close or re-open returned an error.
    pub failed: usize,
}
