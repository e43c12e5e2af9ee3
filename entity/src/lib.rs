//! SeaORM entity definitions for the thxbot database schema.

pub mod prelude;

pub mod blacklist;
pub mod giveaway;
pub mod helper_blacklist;
pub mod participant;
pub mod participant_candidate;
pub mod server_config;
pub mod status_template;
pub mod thx_notification;
