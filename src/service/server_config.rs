use sea_orm::DatabaseConnection;

use crate::{
    data::server_config::ServerConfigRepository,
    error::AppError,
    model::server_config::{ServerConfig, UpdateServerConfigParam},
};

pub struct ServerConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's settings, creating defaults on first contact
    pub async fn get_or_create(&self, guild_id: u64) -> Result<ServerConfig, AppError> {
        Ok(ServerConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?)
    }

    /// Applies a partial settings update
    ///
    /// Out-of-range values are refused with `AppError::SettingsErr` before anything is
    /// written. Callers re-run the guild-wide helper recompute when
    /// `UpdateServerConfigParam::affects_helpers` is true.
    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateServerConfigParam,
    ) -> Result<ServerConfig, AppError> {
        param.validate()?;

        let config = ServerConfigRepository::new(self.db)
            .update(guild_id, param)
            .await?;

        tracing::info!("Updated settings of guild {}", guild_id);

        Ok(config)
    }
}
