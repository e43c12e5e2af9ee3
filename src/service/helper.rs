//! Helper role bookkeeping.
//!
//! Helper status is a pure function of a member's accepted thx count, the guild's
//! threshold and the helper blacklist (see `model::helper::is_helper_eligible`). A
//! recompute compares that result with the member's current roles and issues at most
//! one grant or one revoke, so running it repeatedly is harmless.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        blacklist::BlacklistRepository, participant::ParticipantRepository,
        server_config::ServerConfigRepository,
    },
    error::AppError,
    gateway::{DiscordGateway, MemberInfo},
    model::{
        blacklist::BlacklistKind,
        helper::{is_helper_eligible, HelperChange, HelperSummary},
    },
};

/// Helper role settings of a guild that has the feature enabled.
struct HelperRole {
    role_id: u64,
    threshold: u32,
}

pub struct HelperService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
}

impl<'a> HelperService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: Arc<dyn DiscordGateway>) -> Self {
        Self { db, gateway }
    }

    /// Loads the helper role of a guild, `None` when unset or deleted from Discord.
    async fn helper_role(&self, guild_id: u64) -> Result<Option<HelperRole>, AppError> {
        let config = ServerConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?;

        let Some(role_id) = config.helper_role_id else {
            return Ok(None);
        };

        if !self.gateway.role_exists(guild_id, role_id).await? {
            tracing::warn!(
                "Helper role {} of guild {} no longer exists, skipping helper sync",
                role_id,
                guild_id
            );
            return Ok(None);
        }

        Ok(Some(HelperRole {
            role_id,
            threshold: config.helper_threshold,
        }))
    }

    /// Brings one member's helper role in line with their eligibility.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Member to recompute
    ///
    /// # Returns
    /// - `Ok(HelperChange::Granted | Revoked)` - The single role mutation issued
    /// - `Ok(HelperChange::Unchanged)` - The member already had the correct state
    /// - `Ok(HelperChange::Disabled)` - No usable helper role is configured
    /// - `Ok(HelperChange::NotMember)` - The user is not in the guild
    /// - `Err(AppError)` - Database or Discord error
    pub async fn recompute_helper(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<HelperChange, AppError> {
        let Some(role) = self.helper_role(guild_id).await? else {
            return Ok(HelperChange::Disabled);
        };

        let Some(member) = self.gateway.member(guild_id, user_id).await? else {
            return Ok(HelperChange::NotMember);
        };

        self.sync_member(guild_id, &member, &role).await
    }

    /// Recomputes the helper role of every member of a guild.
    ///
    /// Runs on guild availability and after the threshold or role changes. Per-member
    /// failures are logged and skipped.
    pub async fn recompute_all_helpers(&self, guild_id: u64) -> Result<HelperSummary, AppError> {
        let mut summary = HelperSummary::default();

        let Some(role) = self.helper_role(guild_id).await? else {
            return Ok(summary);
        };

        let members = self.gateway.guild_members(guild_id).await?;

        for member in members.iter().filter(|m| !m.is_bot) {
            match self.sync_member(guild_id, member, &role).await {
                Ok(change) => summary.record(change),
                Err(e) => {
                    tracing::error!(
                        "Failed to recompute helper role of {} in guild {}: {}",
                        member.user_id,
                        guild_id,
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Helper recompute in guild {}: {} granted, {} revoked, {} unchanged",
            guild_id,
            summary.granted,
            summary.revoked,
            summary.unchanged
        );

        Ok(summary)
    }

    async fn sync_member(
        &self,
        guild_id: u64,
        member: &MemberInfo,
        role: &HelperRole,
    ) -> Result<HelperChange, AppError> {
        let accepted = ParticipantRepository::new(self.db)
            .count_accepted_for_user(guild_id, member.user_id)
            .await?;
        let blacklisted = BlacklistRepository::new(self.db)
            .contains(BlacklistKind::Helper, guild_id, member.user_id)
            .await?;

        let eligible = is_helper_eligible(accepted, role.threshold, blacklisted);
        let has_role = member.has_role(role.role_id);

        match (eligible, has_role) {
            (true, false) => {
                self.gateway
                    .add_member_role(guild_id, member.user_id, role.role_id)
                    .await?;
                tracing::info!(
                    "Granted helper role to {} in guild {} ({} accepted thx)",
                    member.user_id,
                    guild_id,
                    accepted
                );
                Ok(HelperChange::Granted)
            }
            (false, true) => {
                self.gateway
                    .remove_member_role(guild_id, member.user_id, role.role_id)
                    .await?;
                tracing::info!(
                    "Revoked helper role from {} in guild {} ({} accepted thx, blacklisted: {})",
                    member.user_id,
                    guild_id,
                    accepted,
                    blacklisted
                );
                Ok(HelperChange::Revoked)
            }
            _ => Ok(HelperChange::Unchanged),
        }
    }
}
