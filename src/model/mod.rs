//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are
//! the only shapes the service and bot layers work with. Discord snowflakes are parsed
//! into `u64` during conversion.

pub mod blacklist;
pub mod candidate;
pub mod decision;
pub mod giveaway;
pub mod helper;
pub mod notification;
pub mod participant;
pub mod server_config;
pub mod status;
