use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError, gateway::DiscordGateway, service::giveaway::GiveawayService,
    voucher::VoucherClient,
};

/// Starts the giveaway scheduler.
///
/// On every tick of `cron` each guild's open giveaway is closed with a draw and a new
/// cycle is opened. Failures are logged by the batch and retried on the next tick.
///
/// # Arguments
/// - `db` - Database connection
/// - `gateway` - Discord gateway for announcements and code DMs
/// - `voucher` - Voucher client handing out codes
/// - `cron` - Six-field cron expression
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
    voucher: Arc<dyn VoucherClient>,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let gateway = gateway.clone();
        let voucher = voucher.clone();

        Box::pin(async move {
            if let Err(e) = GiveawayService::new(&db, gateway, voucher)
                .batch_close_due()
                .await
            {
                tracing::error!("Error closing due giveaways: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Giveaway scheduler started with schedule {}", cron);

    Ok(scheduler)
}
