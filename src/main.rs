use std::sync::Arc;

use thxbot::{
    bot,
    config::Config,
    error::AppError,
    gateway::{DiscordGateway, SerenityGateway},
    scheduler, startup,
    voucher::{HttpVoucherClient, VoucherClient},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let voucher: Arc<dyn VoucherClient> = Arc::new(HttpVoucherClient::new(
        http_client,
        config.voucher_api_url.clone(),
        config.voucher_api_token.clone(),
    ));

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), voucher.clone()).await?;
    let gateway: Arc<dyn DiscordGateway> = Arc::new(SerenityGateway::new(discord_http));

    // Keep the scheduler handle alive for the lifetime of the bot
    let job_scheduler = scheduler::giveaway::start_scheduler(
        db.clone(),
        gateway.clone(),
        voucher,
        &config.giveaway_cron,
    )
    .await?;
    if let Some(cron) = config.status_cron.as_deref() {
        scheduler::status::add_status_job(&job_scheduler, db, gateway, cron).await?;
    }

    bot::start::start_bot(bot_client).await
}
