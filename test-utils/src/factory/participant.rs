//! Participant factory for creating thx entries in a giveaway.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participants with customizable fields.
///
/// The guild is taken from the giveaway so the participant always matches the guild
/// of the cycle it belongs to.
pub struct ParticipantFactory<'a> {
    db: &'a DatabaseConnection,
    giveaway_id: i32,
    guild_id: String,
    user_id: String,
    user_name: String,
    channel_id: String,
    message_id: String,
    is_accepted: Option<bool>,
    accept_user_id: Option<String>,
}

impl<'a> ParticipantFactory<'a> {
    /// Creates a new ParticipantFactory with default values.
    ///
    /// Defaults:
    /// - user_id: unique generated id, user_name `"User {id}"`
    /// - message_id: unique generated id
    /// - is_accepted: `None` (pending)
    pub fn new(db: &'a DatabaseConnection, giveaway: &entity::giveaway::Model) -> Self {
        let id = next_id();
        Self {
            db,
            giveaway_id: giveaway.id,
            guild_id: giveaway.guild_id.clone(),
            user_id: id.to_string(),
            user_name: format!("User {}", id),
            channel_id: "500".to_string(),
            message_id: next_id().to_string(),
            is_accepted: None,
            accept_user_id: None,
        }
    }

    /// Sets the thanked user's ID.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the thanked user's display name.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the thx message ID.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the acceptance state. `Some(_)` also records a moderator.
    pub fn accepted(mut self, is_accepted: Option<bool>) -> Self {
        self.is_accepted = is_accepted;
        self.accept_user_id = is_accepted.map(|_| "9000".to_string());
        self
    }

    /// Builds and inserts the participant entity into the database.
    pub async fn build(self) -> Result<entity::participant::Model, DbErr> {
        let now = Utc::now();
        let resolved = self.is_accepted.is_some();

        entity::participant::ActiveModel {
            giveaway_id: ActiveValue::Set(self.giveaway_id),
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            is_accepted: ActiveValue::Set(self.is_accepted),
            accept_user_id: ActiveValue::Set(self.accept_user_id),
            accept_user_name: ActiveValue::Set(resolved.then(|| "Moderator".to_string())),
            accept_time: ActiveValue::Set(resolved.then_some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a participant for a user with the given acceptance state.
pub async fn create_participant(
    db: &DatabaseConnection,
    giveaway: &entity::giveaway::Model,
    user_id: &str,
    is_accepted: Option<bool>,
) -> Result<entity::participant::Model, DbErr> {
    ParticipantFactory::new(db, giveaway)
        .user_id(user_id)
        .user_name(format!("User {}", user_id))
        .accepted(is_accepted)
        .build()
        .await
}
