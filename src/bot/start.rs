use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::{bot::handler::Handler, config::Config, error::AppError, voucher::VoucherClient};

/// Builds the Discord client without connecting.
///
/// The returned `Http` client is shared with the scheduler so announcements and code
/// DMs reuse the bot's connection.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection for the event handler
/// - `voucher` - Voucher client used by `/draw`
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    voucher: Arc<dyn VoucherClient>,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, voucher))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
