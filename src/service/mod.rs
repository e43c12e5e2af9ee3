//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot dispatch layer and the data layer. They:
//!
//! - **Enforce the rules**: thx guards, moderator checks, terminal nominations
//! - **Orchestrate**: coordinate repositories with Discord and the voucher service
//! - **Report outcomes**: return outcome enums for refused or no-op requests, keeping
//!   `AppError` for real failures

pub mod blacklist;
pub mod builder;
pub mod giveaway;
pub mod helper;
pub mod notification;
pub mod server_config;
pub mod status;
pub mod thx;

#[cfg(test)]
mod test;
