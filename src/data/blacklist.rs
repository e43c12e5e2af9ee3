//! Blacklist repository covering both guild deny-lists.
//!
//! The thx blacklist and the helper blacklist share a schema but live in separate tables.
//! `BlacklistKind` selects the table so services handle both lists through one API.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::blacklist::{BlacklistEntry, BlacklistKind};

/// Repository providing database operations for guild deny-lists.
pub struct BlacklistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlacklistRepository<'a, C> {
    /// Creates a new BlacklistRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a user is on a guild's deny-list.
    pub async fn contains(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
        user_id: u64,
    ) -> Result<bool, DbErr> {
        let guild_id = guild_id.to_string();
        let user_id = user_id.to_string();

        let count = match kind {
            BlacklistKind::Thx => {
                entity::prelude::Blacklist::find()
                    .filter(entity::blacklist::Column::GuildId.eq(guild_id))
                    .filter(entity::blacklist::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?
            }
            BlacklistKind::Helper => {
                entity::prelude::HelperBlacklist::find()
                    .filter(entity::helper_blacklist::Column::GuildId.eq(guild_id))
                    .filter(entity::helper_blacklist::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    /// Adds a user to a guild's deny-list.
    ///
    /// # Arguments
    /// - `kind` - Which list to add to
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - User being blacklisted
    /// - `blacklisted_by_id` - Administrator adding the entry
    ///
    /// # Returns
    /// - `Ok(true)` - The entry was added
    /// - `Ok(false)` - The user was already on the list
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
        user_id: u64,
        blacklisted_by_id: u64,
    ) -> Result<bool, DbErr> {
        if self.contains(kind, guild_id, user_id).await? {
            return Ok(false);
        }

        let now = Utc::now();
        match kind {
            BlacklistKind::Thx => {
                entity::blacklist::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    blacklisted_by_id: ActiveValue::Set(blacklisted_by_id.to_string()),
                    created_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
            }
            BlacklistKind::Helper => {
                entity::helper_blacklist::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    blacklisted_by_id: ActiveValue::Set(blacklisted_by_id.to_string()),
                    created_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(true)
    }

    /// Removes a user from a guild's deny-list.
    ///
    /// # Returns
    /// - `Ok(true)` - An entry was removed
    /// - `Ok(false)` - The user was not on the list
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
        user_id: u64,
    ) -> Result<bool, DbErr> {
        let guild_id = guild_id.to_string();
        let user_id = user_id.to_string();

        let result = match kind {
            BlacklistKind::Thx => {
                entity::prelude::Blacklist::delete_many()
                    .filter(entity::blacklist::Column::GuildId.eq(guild_id))
                    .filter(entity::blacklist::Column::UserId.eq(user_id))
                    .exec(self.db)
                    .await?
            }
            BlacklistKind::Helper => {
                entity::prelude::HelperBlacklist::delete_many()
                    .filter(entity::helper_blacklist::Column::GuildId.eq(guild_id))
                    .filter(entity::helper_blacklist::Column::UserId.eq(user_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Gets every entry on a guild's deny-list, oldest first.
    pub async fn list(
        &self,
        kind: BlacklistKind,
        guild_id: u64,
    ) -> Result<Vec<BlacklistEntry>, DbErr> {
        let guild_id = guild_id.to_string();

        match kind {
            BlacklistKind::Thx => entity::prelude::Blacklist::find()
                .filter(entity::blacklist::Column::GuildId.eq(guild_id))
                .order_by_asc(entity::blacklist::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(BlacklistEntry::from_blacklist)
                .collect(),
            BlacklistKind::Helper => entity::prelude::HelperBlacklist::find()
                .filter(entity::helper_blacklist::Column::GuildId.eq(guild_id))
                .order_by_asc(entity::helper_blacklist::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(BlacklistEntry::from_helper_blacklist)
                .collect(),
        }
    }
}
