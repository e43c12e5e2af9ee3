//! thxbot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the thxbot
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting giveaways, participants, candidates and guild settings
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Giveaway;
//!
//! #[tokio::test]
//! async fn test_giveaway_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Giveaway)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
