//! Factory for status templates.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a status template, optionally marked as posted at `last_posted_at`.
pub async fn create_status_template(
    db: &DatabaseConnection,
    guild_id: &str,
    content: &str,
    last_posted_at: Option<DateTime<Utc>>,
) -> Result<entity::status_template::Model, DbErr> {
    entity::status_template::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        content: ActiveValue::Set(content.to_string()),
        last_posted_at: ActiveValue::Set(last_posted_at),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
