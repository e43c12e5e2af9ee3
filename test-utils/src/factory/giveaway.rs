//! Giveaway factory for creating test giveaway entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test giveaways with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::giveaway::GiveawayFactory;
///
/// let closed = GiveawayFactory::new(&db, "1")
///     .closed(Utc::now())
///     .winner("42", "Winner")
///     .code(Some("CODE-1".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    info_message_id: Option<String>,
    winner_id: Option<String>,
    winner_name: Option<String>,
    code: Option<String>,
}

impl<'a> GiveawayFactory<'a> {
    /// Creates a new GiveawayFactory with default values.
    ///
    /// Defaults:
    /// - start_time: now
    /// - end_time: `None` (open)
    /// - no announcement message, winner or code
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID the giveaway belongs to
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            start_time: Utc::now(),
            end_time: None,
            info_message_id: None,
            winner_id: None,
            winner_name: None,
            code: None,
        }
    }

    /// Marks the giveaway as closed at the given time.
    pub fn closed(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Sets the announcement message ID.
    pub fn info_message_id(mut self, info_message_id: impl Into<String>) -> Self {
        self.info_message_id = Some(info_message_id.into());
        self
    }

    /// Sets the recorded winner.
    pub fn winner(mut self, winner_id: impl Into<String>, winner_name: impl Into<String>) -> Self {
        self.winner_id = Some(winner_id.into());
        self.winner_name = Some(winner_name.into());
        self
    }

    /// Sets the awarded code.
    pub fn code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    /// Builds and inserts the giveaway entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::giveaway::Model)` - Created giveaway entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            info_message_id: ActiveValue::Set(self.info_message_id),
            winner_id: ActiveValue::Set(self.winner_id),
            winner_name: ActiveValue::Set(self.winner_name),
            code: ActiveValue::Set(self.code),
            level: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open giveaway for a guild.
///
/// Shorthand for `GiveawayFactory::new(db, guild_id).build().await`.
pub async fn create_open_giveaway(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db, guild_id).build().await
}
