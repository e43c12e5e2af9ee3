//! Moderator-facing notification mirror.
//!
//! Every thx and nomination transition is mirrored into the guild's thx-info channel.
//! The first transition posts a message; later ones edit it in place. A mirror that was
//! deleted by hand is replaced by a fresh message.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    data::{server_config::ServerConfigRepository, thx_notification::ThxNotificationRepository},
    error::AppError,
    gateway::{DiscordGateway, OutboundMessage},
};

pub struct ThxNotificationService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
}

impl<'a> ThxNotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: Arc<dyn DiscordGateway>) -> Self {
        Self { db, gateway }
    }

    /// Posts or updates the mirror of an origin message.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose thx-info channel receives the mirror
    /// - `origin_message_id` - The thx or nomination message being mirrored
    /// - `message` - Mirror content
    ///
    /// # Returns
    /// - `Ok(Some(message_id))` - The mirror message now showing `message`
    /// - `Ok(None)` - The guild has no thx-info channel; nothing was sent
    /// - `Err(AppError)` - Database error or Discord refused the new message
    pub async fn upsert(
        &self,
        guild_id: u64,
        origin_message_id: u64,
        message: OutboundMessage,
    ) -> Result<Option<u64>, AppError> {
        let config = ServerConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;
        let Some(channel_id) = config.and_then(|c| c.thx_info_channel_id) else {
            return Ok(None);
        };

        let repo = ThxNotificationRepository::new(self.db);

        if let Some(existing) = repo.find_by_message_id(origin_message_id).await? {
            match self
                .gateway
                .edit_message(channel_id, existing.notification_message_id, message.clone())
                .await
            {
                Ok(()) => {
                    repo.touch(origin_message_id).await?;
                    return Ok(Some(existing.notification_message_id));
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to edit notification {} for message {}, posting a new one: {}",
                        existing.notification_message_id,
                        origin_message_id,
                        e
                    );
                }
            }
        }

        let notification_message_id = self.gateway.send_message(channel_id, message).await?;
        repo.upsert(origin_message_id, notification_message_id)
            .await?;

        tracing::debug!(
            "Mirrored message {} as {} in channel {}",
            origin_message_id,
            notification_message_id,
            channel_id
        );

        Ok(Some(notification_message_id))
    }
}
