//! Status template repository.
//!
//! Templates rotate by `last_posted_at`: a template never posted comes first, otherwise
//! the one posted longest ago. Ties fall back to insertion order.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, NullOrdering, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::status::StatusTemplate;

/// Repository providing database operations for status templates.
pub struct StatusTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatusTemplateRepository<'a, C> {
    /// Creates a new StatusTemplateRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a new template for a guild.
    pub async fn create(&self, guild_id: u64, content: &str) -> Result<StatusTemplate, DbErr> {
        let entity = entity::status_template::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            content: ActiveValue::Set(content.to_string()),
            last_posted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        StatusTemplate::from_entity(entity)
    }

    /// Deletes a template, scoped to its guild so one guild cannot remove another's.
    ///
    /// # Returns
    /// - `Ok(true)` - The template was deleted
    /// - `Ok(false)` - No template with that id exists in the guild
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StatusTemplate::delete_many()
            .filter(entity::status_template::Column::Id.eq(id))
            .filter(entity::status_template::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every template of a guild, oldest first.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<StatusTemplate>, DbErr> {
        entity::prelude::StatusTemplate::find()
            .filter(entity::status_template::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::status_template::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(StatusTemplate::from_entity)
            .collect()
    }

    pub async fn count(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::StatusTemplate::find()
            .filter(entity::status_template::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await
    }

    /// Gets the template due next in a guild's rotation.
    pub async fn next_in_rotation(&self, guild_id: u64) -> Result<Option<StatusTemplate>, DbErr> {
        entity::prelude::StatusTemplate::find()
            .filter(entity::status_template::Column::GuildId.eq(guild_id.to_string()))
            .order_by_with_nulls(
                entity::status_template::Column::LastPostedAt,
                Order::Asc,
                NullOrdering::First,
            )
            .order_by_asc(entity::status_template::Column::Id)
            .one(self.db)
            .await?
            .map(StatusTemplate::from_entity)
            .transpose()
    }

    /// Records that a template was posted, moving it to the back of the rotation.
    pub async fn mark_posted(&self, id: i32, posted_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::StatusTemplate::update_many()
            .col_expr(
                entity::status_template::Column::LastPostedAt,
                Expr::value(posted_at),
            )
            .filter(entity::status_template::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the guilds holding at least one template.
    pub async fn guild_ids(&self) -> Result<Vec<u64>, DbErr> {
        let guild_ids: Vec<String> = entity::prelude::StatusTemplate::find()
            .select_only()
            .column(entity::status_template::Column::GuildId)
            .distinct()
            .into_tuple()
            .all(self.db)
            .await?;

        guild_ids
            .into_iter()
            .map(crate::util::parse::parse_snowflake)
            .collect()
    }
}
