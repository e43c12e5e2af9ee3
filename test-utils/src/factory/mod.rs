//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let giveaway = factory::create_open_giveaway(&db, "1").await?;
//! let participant = factory::participant::ParticipantFactory::new(&db, &giveaway)
//!     .user_id("42")
//!     .accepted(Some(true))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `giveaway` - Create open or closed giveaways
//! - `participant` - Create thx entries attached to a giveaway
//! - `participant_candidate` - Create pending or resolved nominations
//! - `server_config` - Create per-guild settings
//! - `blacklist` - Create blacklist and helper blacklist entries
//! - `status_template` - Create status templates, posted or not
//! - `helpers` - Unique id generation

pub mod blacklist;
pub mod giveaway;
pub mod helpers;
pub mod participant;
pub mod participant_candidate;
pub mod server_config;
pub mod status_template;

pub use blacklist::{create_blacklist_entry, create_helper_blacklist_entry};
pub use giveaway::create_open_giveaway;
pub use participant::create_participant;
pub use participant_candidate::create_candidate;
pub use server_config::create_server_config;
pub use status_template::create_status_template;
