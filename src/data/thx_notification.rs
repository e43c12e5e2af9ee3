//! Thx notification repository.
//!
//! Stores the mapping from a thx or nomination message to its mirror in the guild's
//! thx-info channel, keyed by the origin message.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::notification::ThxNotification;

/// Repository providing database operations for notification mirrors.
pub struct ThxNotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ThxNotificationRepository<'a, C> {
    /// Creates a new ThxNotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the mirror of an origin message.
    ///
    /// # Arguments
    /// - `message_id` - The thx or nomination message
    ///
    /// # Returns
    /// - `Ok(Some(ThxNotification))` - A mirror has been posted before
    /// - `Ok(None)` - No mirror exists yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<ThxNotification>, DbErr> {
        entity::prelude::ThxNotification::find()
            .filter(entity::thx_notification::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(ThxNotification::from_entity)
            .transpose()
    }

    /// Creates or updates the mirror of an origin message.
    ///
    /// If a row exists for `message_id` its `notification_message_id` and `updated_at`
    /// are replaced; otherwise a new row is inserted.
    ///
    /// # Arguments
    /// - `message_id` - The thx or nomination message
    /// - `notification_message_id` - The mirror message in the thx-info channel
    ///
    /// # Returns
    /// - `Ok(ThxNotification)` - The created or updated mapping
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        message_id: u64,
        notification_message_id: u64,
    ) -> Result<ThxNotification, DbErr> {
        let existing = entity::prelude::ThxNotification::find()
            .filter(entity::thx_notification::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            let mut active: entity::thx_notification::ActiveModel = existing.into();
            active.notification_message_id = ActiveValue::Set(notification_message_id.to_string());
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?
        } else {
            entity::thx_notification::ActiveModel {
                id: ActiveValue::NotSet,
                message_id: ActiveValue::Set(message_id.to_string()),
                notification_message_id: ActiveValue::Set(notification_message_id.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        ThxNotification::from_entity(entity)
    }

    /// Bumps `updated_at` after the mirror was edited in place.
    pub async fn touch(&self, message_id: u64) -> Result<(), DbErr> {
        let existing = entity::prelude::ThxNotification::find()
            .filter(entity::thx_notification::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active: entity::thx_notification::ActiveModel = existing.into();
            active.updated_at = ActiveValue::Set(Utc::now());
            active.update(self.db).await?;
        }

        Ok(())
    }
}
