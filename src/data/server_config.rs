//! Server configuration repository for per-guild settings.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::server_config::{
    format_level_thresholds, ServerConfig, UpdateServerConfigParam, DEFAULT_HELPER_THRESHOLD,
    DEFAULT_WINNER_COUNT,
};

/// Repository providing database operations for per-guild settings.
///
/// A guild has exactly one settings row, created on first contact with every channel and
/// role unset.
pub struct ServerConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServerConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the settings of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(ServerConfig))` - Settings row found
    /// - `Ok(None)` - The guild has never been seen
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<ServerConfig>, DbErr> {
        entity::prelude::ServerConfig::find()
            .filter(entity::server_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(ServerConfig::from_entity)
            .transpose()
    }

    /// Gets the settings of a guild, inserting defaults if none exist.
    pub async fn get_or_create(&self, guild_id: u64) -> Result<ServerConfig, DbErr> {
        if let Some(config) = self.find_by_guild_id(guild_id).await? {
            return Ok(config);
        }

        let entity = entity::server_config::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            admin_role_id: ActiveValue::Set(None),
            giveaway_channel_id: ActiveValue::Set(None),
            thx_info_channel_id: ActiveValue::Set(None),
            unconditional_channel_id: ActiveValue::Set(None),
            conditional_channel_id: ActiveValue::Set(None),
            helper_role_id: ActiveValue::Set(None),
            helper_threshold: ActiveValue::Set(DEFAULT_HELPER_THRESHOLD as i32),
            unconditional_winner_count: ActiveValue::Set(DEFAULT_WINNER_COUNT as i32),
            conditional_winner_count: ActiveValue::Set(DEFAULT_WINNER_COUNT as i32),
            level_thresholds: ActiveValue::Set(String::new()),
        }
        .insert(self.db)
        .await?;

        ServerConfig::from_entity(entity)
    }

    /// Applies a partial update to a guild's settings.
    ///
    /// Fields left as `None` in `param` keep their stored value. The row is created with
    /// defaults first if the guild has none.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(ServerConfig)` - Settings after the update
    /// - `Err(DbErr::Custom)` - A count does not fit its column; nothing was stored
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateServerConfigParam,
    ) -> Result<ServerConfig, DbErr> {
        let current = self.get_or_create(guild_id).await?;
        if param.is_empty() {
            return Ok(current);
        }

        let Some(existing) = entity::prelude::ServerConfig::find_by_id(current.id)
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!(
                "server config for guild {}",
                guild_id
            )));
        };

        let mut active: entity::server_config::ActiveModel = existing.into();
        if let Some(role_id) = param.admin_role_id {
            active.admin_role_id = ActiveValue::Set(Some(role_id.to_string()));
        }
        if let Some(channel_id) = param.giveaway_channel_id {
            active.giveaway_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        }
        if let Some(channel_id) = param.thx_info_channel_id {
            active.thx_info_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        }
        if let Some(channel_id) = param.unconditional_channel_id {
            active.unconditional_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        }
        if let Some(channel_id) = param.conditional_channel_id {
            active.conditional_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        }
        if let Some(role_id) = param.helper_role_id {
            active.helper_role_id = ActiveValue::Set(Some(role_id.to_string()));
        }
        if let Some(threshold) = param.helper_threshold {
            active.helper_threshold = ActiveValue::Set(to_column("helper_threshold", threshold)?);
        }
        if let Some(count) = param.unconditional_winner_count {
            active.unconditional_winner_count =
                ActiveValue::Set(to_column("unconditional_winner_count", count)?);
        }
        if let Some(count) = param.conditional_winner_count {
            active.conditional_winner_count =
                ActiveValue::Set(to_column("conditional_winner_count", count)?);
        }
        if let Some(levels) = param.level_thresholds {
            active.level_thresholds = ActiveValue::Set(format_level_thresholds(&levels));
        }

        let entity = active.update(self.db).await?;

        ServerConfig::from_entity(entity)
    }
}

fn to_column(column: &str, value: u32) -> Result<i32, DbErr> {
    i32::try_from(value)
        .map_err(|_| DbErr::Custom(format!("{} {} does not fit the column", column, value)))
}
