//! Participant repository for thx entries.
//!
//! Participants are never deleted. Moderation flips `is_accepted` and records who did it
//! and when, so the full history of a cycle stays queryable after it closes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::participant::{CreateParticipantParam, Moderator, Participant};

/// Repository providing database operations for thx entries.
pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    /// Creates a new ParticipantRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending thx entry.
    ///
    /// # Arguments
    /// - `param` - Giveaway, thanked user and the thx message carrying the controls
    ///
    /// # Returns
    /// - `Ok(Participant)` - The created entry with state `Pending`
    /// - `Err(DbErr)` - Database error, including a duplicate `message_id`
    pub async fn create(&self, param: CreateParticipantParam) -> Result<Participant, DbErr> {
        let entity = entity::participant::ActiveModel {
            id: ActiveValue::NotSet,
            giveaway_id: ActiveValue::Set(param.giveaway_id),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            user_name: ActiveValue::Set(param.user_name),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            is_accepted: ActiveValue::Set(None),
            accept_user_id: ActiveValue::Set(None),
            accept_user_name: ActiveValue::Set(None),
            accept_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Participant::from_entity(entity)
    }

    /// Gets the thx entry attached to a message.
    pub async fn find_by_message_id(&self, message_id: u64) -> Result<Option<Participant>, DbErr> {
        entity::prelude::Participant::find()
            .filter(entity::participant::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(Participant::from_entity)
            .transpose()
    }

    /// Sets the moderation state of an entry and records the moderator.
    ///
    /// # Arguments
    /// - `id` - Participant ID
    /// - `is_accepted` - New state
    /// - `moderator` - Moderator performing the transition
    ///
    /// # Returns
    /// - `Ok(Some(Participant))` - The updated entry
    /// - `Ok(None)` - No entry with that ID exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_state(
        &self,
        id: i32,
        is_accepted: bool,
        moderator: &Moderator,
    ) -> Result<Option<Participant>, DbErr> {
        let Some(existing) = entity::prelude::Participant::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::participant::ActiveModel = existing.into();
        active.is_accepted = ActiveValue::Set(Some(is_accepted));
        active.accept_user_id = ActiveValue::Set(Some(moderator.user_id.to_string()));
        active.accept_user_name = ActiveValue::Set(Some(moderator.name.clone()));
        active.accept_time = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Participant::from_entity(entity).map(Some)
    }

    /// Gets every entry of a giveaway in creation order.
    pub async fn find_by_giveaway(&self, giveaway_id: i32) -> Result<Vec<Participant>, DbErr> {
        entity::prelude::Participant::find()
            .filter(entity::participant::Column::GiveawayId.eq(giveaway_id))
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Participant::from_entity)
            .collect()
    }

    /// Gets the accepted entries of a giveaway, the pool a winner is drawn from.
    pub async fn find_accepted_by_giveaway(
        &self,
        giveaway_id: i32,
    ) -> Result<Vec<Participant>, DbErr> {
        entity::prelude::Participant::find()
            .filter(entity::participant::Column::GiveawayId.eq(giveaway_id))
            .filter(entity::participant::Column::IsAccepted.eq(true))
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Participant::from_entity)
            .collect()
    }

    /// Counts a user's accepted thx across every giveaway of a guild.
    ///
    /// This is the count helper eligibility is computed from.
    pub async fn count_accepted_for_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Participant::find()
            .filter(entity::participant::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::participant::Column::UserId.eq(user_id.to_string()))
            .filter(entity::participant::Column::IsAccepted.eq(true))
            .count(self.db)
            .await
    }
}
