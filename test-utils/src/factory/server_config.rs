//! Server configuration factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating per-guild settings.
///
/// Defaults leave every channel and role unset with a helper threshold of 5, one
/// winner per giveaway variant and no levels.
pub struct ServerConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    admin_role_id: Option<String>,
    giveaway_channel_id: Option<String>,
    thx_info_channel_id: Option<String>,
    helper_role_id: Option<String>,
    helper_threshold: i32,
    level_thresholds: String,
}

impl<'a> ServerConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            admin_role_id: None,
            giveaway_channel_id: None,
            thx_info_channel_id: None,
            helper_role_id: None,
            helper_threshold: 5,
            level_thresholds: String::new(),
        }
    }

    pub fn admin_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.admin_role_id = Some(role_id.into());
        self
    }

    pub fn giveaway_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.giveaway_channel_id = Some(channel_id.into());
        self
    }

    pub fn thx_info_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.thx_info_channel_id = Some(channel_id.into());
        self
    }

    pub fn helper_role(mut self, role_id: impl Into<String>, threshold: i32) -> Self {
        self.helper_role_id = Some(role_id.into());
        self.helper_threshold = threshold;
        self
    }

    /// Sets the stored level list, e.g. `"10,25,50"`.
    pub fn level_thresholds(mut self, levels: impl Into<String>) -> Self {
        self.level_thresholds = levels.into();
        self
    }

    pub async fn build(self) -> Result<entity::server_config::Model, DbErr> {
        entity::server_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            admin_role_id: ActiveValue::Set(self.admin_role_id),
            giveaway_channel_id: ActiveValue::Set(self.giveaway_channel_id),
            thx_info_channel_id: ActiveValue::Set(self.thx_info_channel_id),
            helper_role_id: ActiveValue::Set(self.helper_role_id),
            helper_threshold: ActiveValue::Set(self.helper_threshold),
            unconditional_winner_count: ActiveValue::Set(1),
            conditional_winner_count: ActiveValue::Set(1),
            level_thresholds: ActiveValue::Set(self.level_thresholds),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server configuration with default values.
pub async fn create_server_config(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::server_config::Model, DbErr> {
    ServerConfigFactory::new(db, guild_id).build().await
}
