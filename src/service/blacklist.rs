//! Guild deny-list management.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    data::blacklist::BlacklistRepository,
    error::AppError,
    gateway::DiscordGateway,
    model::blacklist::{BlacklistEntry, BlacklistKind},
    service::helper::HelperService,
};

pub struct BlacklistService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
}

impl<'a> BlacklistService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: Arc<dyn DiscordGateway>) -> Self {
        Self { db, gateway }
    }

    /// Adds a user to a deny-list.
    ///
    /// Adding to the helper blacklist immediately recomputes the user's helper role, so
    /// a current helper loses it right away.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was added
    /// - `Ok(false)` - The user was already listed
    pub async fn add(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
        user_id: u64,
        blacklisted_by_id: u64,
    ) -> Result<bool, AppError> {
        let added = BlacklistRepository::new(self.db)
            .add(kind, guild_id, user_id, blacklisted_by_id)
            .await?;

        if added {
            tracing::info!(
                "{} added {} to the {:?} blacklist of guild {}",
                blacklisted_by_id,
                user_id,
                kind,
                guild_id
            );
            self.after_change(kind, guild_id, user_id).await;
        }

        Ok(added)
    }

    /// Removes a user from a deny-list.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was removed
    /// - `Ok(false)` - The user was not listed
    pub async fn remove(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
        user_id: u64,
    ) -> Result<bool, AppError> {
        let removed = BlacklistRepository::new(self.db)
            .remove(kind, guild_id, user_id)
            .await?;

        if removed {
            tracing::info!(
                "Removed {} from the {:?} blacklist of guild {}",
                user_id,
                kind,
                guild_id
            );
            self.after_change(kind, guild_id, user_id).await;
        }

        Ok(removed)
    }

    pub async fn is_blacklisted(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
        user_id: u64,
    ) -> Result<bool, AppError> {
        Ok(BlacklistRepository::new(self.db)
            .contains(kind, guild_id, user_id)
            .await?)
    }

    pub async fn list(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
    ) -> Result<Vec<BlacklistEntry>, AppError> {
        Ok(BlacklistRepository::new(self.db).list(kind, guild_id).await?)
    }

    async fn after_change(&self, kind: BlacklistKind, guild_id: u64, user_id: u64) {
        if kind != BlacklistKind::Helper {
            return;
        }

        if let Err(e) = HelperService::new(self.db, self.gateway.clone())
            .recompute_helper(guild_id, user_id)
            .await
        {
            tracing::error!(
                "Failed to recompute helper role of {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
        }
    }
}
