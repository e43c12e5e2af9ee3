//! Domain models for per-guild settings.

use sea_orm::DbErr;

use crate::{
    error::settings::SettingsError,
    util::parse::{parse_optional_snowflake, parse_snowflake},
};

/// Helper threshold used for guilds that never configured one.
pub const DEFAULT_HELPER_THRESHOLD: u32 = 5;

/// Largest helper threshold that fits the stored column.
pub const MAX_HELPER_THRESHOLD: u32 = i32::MAX as u32;

/// Winners drawn per giveaway variant unless configured otherwise.
pub const DEFAULT_WINNER_COUNT: u32 = 1;

pub const MAX_WINNER_COUNT: u32 = 20;

pub const MAX_LEVELS: usize = 10;

/// Per-guild settings.
///
/// Unset channels and roles disable the feature that needs them: no thx-info channel
/// means no notification mirror, no helper role means no helper bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub id: i32,
    pub guild_id: u64,
    /// Role whose holders moderate thx in addition to `MANAGE_MESSAGES` holders.
    pub admin_role_id: Option<u64>,
    /// Main channel, used for winner and "no winner" announcements and status posts.
    pub giveaway_channel_id: Option<u64>,
    /// Channel holding moderator-facing notification mirrors.
    pub thx_info_channel_id: Option<u64>,
    pub unconditional_channel_id: Option<u64>,
    pub conditional_channel_id: Option<u64>,
    pub helper_role_id: Option<u64>,
    /// Accepted thx needed for the helper role, inclusive.
    pub helper_threshold: u32,
    pub unconditional_winner_count: u32,
    pub conditional_winner_count: u32,
    /// Accepted thx counts unlocking each level, strictly ascending.
    pub level_thresholds: Vec<u32>,
}

impl ServerConfig {
    pub fn from_entity(entity: entity::server_config::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(entity.guild_id)?,
            admin_role_id: parse_optional_snowflake(entity.admin_role_id)?,
            giveaway_channel_id: parse_optional_snowflake(entity.giveaway_channel_id)?,
            thx_info_channel_id: parse_optional_snowflake(entity.thx_info_channel_id)?,
            unconditional_channel_id: parse_optional_snowflake(entity.unconditional_channel_id)?,
            conditional_channel_id: parse_optional_snowflake(entity.conditional_channel_id)?,
            helper_role_id: parse_optional_snowflake(entity.helper_role_id)?,
            helper_threshold: stored_count("helper_threshold", entity.helper_threshold)?,
            unconditional_winner_count: stored_count(
                "unconditional_winner_count",
                entity.unconditional_winner_count,
            )?,
            conditional_winner_count: stored_count(
                "conditional_winner_count",
                entity.conditional_winner_count,
            )?,
            level_thresholds: parse_level_thresholds(&entity.level_thresholds)
                .map_err(|e| DbErr::Custom(format!("stored level_thresholds: {}", e)))?,
        })
    }
}

fn stored_count(column: &str, value: i32) -> Result<u32, DbErr> {
    u32::try_from(value).map_err(|_| DbErr::Custom(format!("negative {}: {}", column, value)))
}

/// Parses a comma-separated list of level thresholds such as `10,25,50`.
///
/// An empty input or `none` clears the list.
pub fn parse_level_thresholds(input: &str) -> Result<Vec<u32>, SettingsError> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let levels = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<u32>() {
                Ok(value) if value > 0 && value <= MAX_HELPER_THRESHOLD => Ok(value),
                _ => Err(SettingsError::InvalidLevelThreshold(part.to_string())),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if levels.len() > MAX_LEVELS {
        return Err(SettingsError::TooManyLevels { max: MAX_LEVELS });
    }
    if levels.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(SettingsError::LevelThresholdsNotAscending);
    }

    Ok(levels)
}

/// Formats level thresholds the way they are stored.
pub fn format_level_thresholds(levels: &[u32]) -> String {
    levels
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Partial update of a guild's settings; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateServerConfigParam {
    pub admin_role_id: Option<u64>,
    pub giveaway_channel_id: Option<u64>,
    pub thx_info_channel_id: Option<u64>,
    pub unconditional_channel_id: Option<u64>,
    pub conditional_channel_id: Option<u64>,
    pub helper_role_id: Option<u64>,
    pub helper_threshold: Option<u32>,
    pub unconditional_winner_count: Option<u32>,
    pub conditional_winner_count: Option<u32>,
    /// `Some(vec![])` clears the levels.
    pub level_thresholds: Option<Vec<u32>>,
}

impl UpdateServerConfigParam {
    pub fn is_empty(&self) -> bool {
        self.admin_role_id.is_none()
            && self.giveaway_channel_id.is_none()
            && self.thx_info_channel_id.is_none()
            && self.unconditional_channel_id.is_none()
            && self.conditional_channel_id.is_none()
            && self.helper_role_id.is_none()
            && self.helper_threshold.is_none()
            && self.unconditional_winner_count.is_none()
            && self.conditional_winner_count.is_none()
            && self.level_thresholds.is_none()
    }

    /// Whether the update can change who qualifies for the helper role.
    pub fn affects_helpers(&self) -> bool {
        self.helper_role_id.is_some() || self.helper_threshold.is_some()
    }

    /// Checks numeric ranges before anything is stored.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(threshold) = self.helper_threshold {
            check_range("Helper threshold", threshold, 0, MAX_HELPER_THRESHOLD)?;
        }
        if let Some(count) = self.unconditional_winner_count {
            check_range("Unconditional winners", count, 1, MAX_WINNER_COUNT)?;
        }
        if let Some(count) = self.conditional_winner_count {
            check_range("Conditional winners", count, 1, MAX_WINNER_COUNT)?;
        }
        if let Some(levels) = &self.level_thresholds {
            if levels.len() > MAX_LEVELS {
                return Err(SettingsError::TooManyLevels { max: MAX_LEVELS });
            }
            if levels.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(SettingsError::LevelThresholdsNotAscending);
            }
            if let Some(level) = levels
                .iter()
                .find(|level| **level == 0 || **level > MAX_HELPER_THRESHOLD)
            {
                return Err(SettingsError::InvalidLevelThreshold(level.to_string()));
            }
        }

        Ok(())
    }
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> Result<(), SettingsError> {
    if value < min || value > max {
        return Err(SettingsError::OutOfRange {
            name,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }

    Ok(())
}
