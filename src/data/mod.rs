//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table the bot owns. Repositories use SeaORM entity models internally and return
//! domain models from `crate::model`, so nothing outside this layer touches entity types.
//!
//! Repositories are generic over `ConnectionTrait`. Passing a `DatabaseTransaction`
//! instead of the pooled connection runs the same queries inside a transaction, which is
//! how the giveaway close path claims, draws and writes atomically.

pub mod blacklist;
pub mod candidate;
pub mod giveaway;
pub mod participant;
pub mod server_config;
pub mod status_template;
pub mod thx_notification;

#[cfg(test)]
mod test;
