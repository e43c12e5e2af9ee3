//! Factories for blacklist and helper blacklist entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a blacklist entry for a user in a guild.
pub async fn create_blacklist_entry(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::blacklist::Model, DbErr> {
    entity::blacklist::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        blacklisted_by_id: ActiveValue::Set("9000".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a helper blacklist entry for a user in a guild.
pub async fn create_helper_blacklist_entry(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::helper_blacklist::Model, DbErr> {
    entity::helper_blacklist::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        blacklisted_by_id: ActiveValue::Set("9000".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
