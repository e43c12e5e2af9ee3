//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after authentication. Registers the slash commands
//! globally so new or changed commands are picked up on every restart.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Counting thx")));

    match Command::set_global_commands(&ctx.http, commands::all()).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
