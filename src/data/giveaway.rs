//! Giveaway repository for database operations.
//!
//! This module provides the `GiveawayRepository` for opening, closing and querying
//! giveaway cycles. A guild has at most one open giveaway (a row whose `end_time` is
//! null), enforced by the partial unique index `idx_giveaway_open_guild_id`. Closing
//! is a compare-and-swap on that column so two concurrent closers can never both
//! succeed.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::giveaway::{Giveaway, GiveawayWinnerParam};

/// Repository providing database operations for giveaway cycles.
pub struct GiveawayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GiveawayRepository<'a, C> {
    /// Creates a new GiveawayRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a giveaway by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Giveaway>, DbErr> {
        entity::prelude::Giveaway::find_by_id(id)
            .one(self.db)
            .await?
            .map(Giveaway::from_entity)
            .transpose()
    }

    /// Gets the open giveaway of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - The guild's open giveaway
    /// - `Ok(None)` - The guild has no open giveaway
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_open(&self, guild_id: u64) -> Result<Option<Giveaway>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::giveaway::Column::EndTime.is_null())
            .order_by_asc(entity::giveaway::Column::Id)
            .one(self.db)
            .await?
            .map(Giveaway::from_entity)
            .transpose()
    }

    /// Inserts a new open giveaway for a guild starting at `start_time`.
    ///
    /// Fails with a unique constraint violation if the guild already has an open
    /// giveaway; callers go through `ensure_open_giveaway`, which handles that.
    pub async fn create_open(
        &self,
        guild_id: u64,
        start_time: DateTime<Utc>,
    ) -> Result<Giveaway, DbErr> {
        let entity = entity::giveaway::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(None),
            info_message_id: ActiveValue::Set(None),
            winner_id: ActiveValue::Set(None),
            winner_name: ActiveValue::Set(None),
            code: ActiveValue::Set(None),
            level: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Giveaway::from_entity(entity)
    }

    /// Claims an open giveaway for closing.
    ///
    /// Sets `end_time` only if it is still null. Exactly one caller observes `true` for a
    /// given giveaway; every later or concurrent caller observes `false`.
    ///
    /// # Arguments
    /// - `id` - Giveaway ID to close
    /// - `end_time` - Close timestamp
    ///
    /// # Returns
    /// - `Ok(true)` - This call closed the giveaway
    /// - `Ok(false)` - The giveaway was already closed or does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim_close(&self, id: i32, end_time: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Giveaway::update_many()
            .col_expr(entity::giveaway::Column::EndTime, Expr::value(end_time))
            .filter(entity::giveaway::Column::Id.eq(id))
            .filter(entity::giveaway::Column::EndTime.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Records the drawn winner and the code awarded to them.
    pub async fn set_winner(&self, id: i32, param: GiveawayWinnerParam) -> Result<(), DbErr> {
        entity::prelude::Giveaway::update_many()
            .col_expr(
                entity::giveaway::Column::WinnerId,
                Expr::value(param.winner_id.to_string()),
            )
            .col_expr(
                entity::giveaway::Column::WinnerName,
                Expr::value(param.winner_name),
            )
            .col_expr(entity::giveaway::Column::Code, Expr::value(param.code))
            .filter(entity::giveaway::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records the announcement message posted for a closed giveaway.
    pub async fn set_info_message_id(&self, id: i32, message_id: u64) -> Result<(), DbErr> {
        entity::prelude::Giveaway::update_many()
            .col_expr(
                entity::giveaway::Column::InfoMessageId,
                Expr::value(message_id.to_string()),
            )
            .filter(entity::giveaway::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the giveaway whose announcement is the given message.
    pub async fn find_by_info_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<Giveaway>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::InfoMessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(Giveaway::from_entity)
            .transpose()
    }

    /// Gets the distinct guild IDs that currently have an open giveaway.
    pub async fn open_guild_ids(&self) -> Result<Vec<u64>, DbErr> {
        let guild_ids: Vec<String> = entity::prelude::Giveaway::find()
            .select_only()
            .column(entity::giveaway::Column::GuildId)
            .filter(entity::giveaway::Column::EndTime.is_null())
            .distinct()
            .into_tuple()
            .all(self.db)
            .await?;

        guild_ids
            .into_iter()
            .map(crate::util::parse::parse_snowflake)
            .collect()
    }
}
