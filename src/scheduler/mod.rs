//! Cron jobs driving the giveaway cycle and status announcements.

pub mod giveaway;
pub mod status;
