use sea_orm::DbErr;

use crate::error::internal::InternalError;

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })
}

/// Parses a stored Discord snowflake at the repository boundary.
///
/// Snowflakes are persisted as decimal strings while domain models expose them as `u64`.
/// A malformed value means the row was written outside the bot, so it surfaces as a
/// database error.
pub fn parse_snowflake(value: String) -> Result<u64, DbErr> {
    parse_u64_from_string(value).map_err(|e| DbErr::Custom(e.to_string()))
}

/// Parses an optional stored snowflake, keeping `None` as `None`.
pub fn parse_optional_snowflake(value: Option<String>) -> Result<Option<u64>, DbErr> {
    value.map(parse_snowflake).transpose()
}
