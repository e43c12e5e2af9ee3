//! Discord bot running thx giveaways.
//!
//! Members thank each other with `/thx`; moderators accept or reject each thx. On a
//! schedule every guild's open giveaway is closed, a winner is drawn uniformly from the
//! accepted thx and receives a voucher code. Accepted thx also count toward the helper
//! role.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod gateway;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
pub mod voucher;
