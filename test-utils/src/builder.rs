use entity::prelude::*;
use sea_orm::{
    sea_query::{ConditionalStatement, Expr, ExprTrait, Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Giveaway, Participant};
///
/// let test = TestBuilder::new()
///     .with_table(Giveaway)
///     .with_table(Participant)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index that entity derives cannot express, such as a partial index.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables required for giveaway operations.
    ///
    /// Adds, in dependency order:
    /// - ServerConfig
    /// - Giveaway, with the unique index allowing one open giveaway per guild
    /// - Participant
    pub fn with_giveaway_tables(self) -> Self {
        self.with_table(ServerConfig)
            .with_table(Giveaway)
            .with_index(open_giveaway_index())
            .with_table(Participant)
    }

    /// Adds every table used by the thx workflow.
    ///
    /// Equivalent to `with_giveaway_tables()` plus candidates, notifications and both
    /// blacklists.
    pub fn with_thx_tables(self) -> Self {
        self.with_giveaway_tables()
            .with_table(ParticipantCandidate)
            .with_table(ThxNotification)
            .with_table(Blacklist)
            .with_table(HelperBlacklist)
    }

    /// Adds the tables used by status announcements.
    ///
    /// Equivalent to `with_giveaway_tables()` plus status templates, since the rendered
    /// figures come from the open giveaway.
    pub fn with_status_tables(self) -> Self {
        self.with_giveaway_tables().with_table(StatusTemplate)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// Mirrors the `idx_giveaway_open_guild_id` migration index.
fn open_giveaway_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_giveaway_open_guild_id")
        .table(entity::giveaway::Entity)
        .col(entity::giveaway::Column::GuildId)
        .unique()
        .and_where(Expr::col(entity::giveaway::Column::EndTime).is_null())
        .to_owned()
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
