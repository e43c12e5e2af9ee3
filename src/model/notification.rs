//! Domain model for the moderator-facing notification mirror.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// Maps a thx or nomination message to its copy in the thx-info channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ThxNotification {
    pub id: i32,
    /// The origin thx or nomination message.
    pub message_id: u64,
    /// The mirror message in the thx-info channel.
    pub notification_message_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ThxNotification {
    pub fn from_entity(entity: entity::thx_notification::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            message_id: parse_snowflake(entity.message_id)?,
            notification_message_id: parse_snowflake(entity.notification_message_id)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Status shown on a mirrored notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    /// Waiting for a moderator or approver.
    Wait,
    Confirm,
    Reject,
}

impl NotificationStatus {
    pub fn label(self) -> &'static str {
        match self {
            NotificationStatus::Wait => "Waiting for approval",
            NotificationStatus::Confirm => "Accepted",
            NotificationStatus::Reject => "Rejected",
        }
    }

    pub fn color(self) -> u32 {
        match self {
            NotificationStatus::Wait => 0xf39c12,
            NotificationStatus::Confirm => 0x2ecc71,
            NotificationStatus::Reject => 0xe74c3c,
        }
    }
}
