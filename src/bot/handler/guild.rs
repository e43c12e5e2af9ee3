//! Guild availability handler.
//!
//! `guild_create` fires on startup for every guild the bot is in and when it joins a new
//! one. Settings are created on first contact and helper roles are brought in line with
//! the stored thx, catching changes missed while the bot was offline.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::{
    bot::handler::gateway,
    service::{helper::HelperService, server_config::ServerConfigService},
};

/// Handles the guild_create event.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context providing the HTTP client
/// - `guild` - The guild that became available
pub async fn handle_guild_create(db: &DatabaseConnection, ctx: Context, guild: Guild) {
    let guild_id = guild.id.get();

    tracing::debug!("Guild create event: {} ({})", guild.name, guild_id);

    if let Err(e) = ServerConfigService::new(db).get_or_create(guild_id).await {
        tracing::error!("Failed to create settings for guild {}: {}", guild_id, e);
        return;
    }

    if let Err(e) = HelperService::new(db, gateway(&ctx))
        .recompute_all_helpers(guild_id)
        .await
    {
        tracing::error!("Failed to sync helper roles in guild {}: {}", guild_id, e);
    }
}
