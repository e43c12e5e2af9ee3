use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, gateway::DiscordGateway, service::status::StatusService};

/// Adds the status announcement job to a running scheduler.
///
/// On every tick of `cron` each guild with templates gets its next template posted.
///
/// # Returns
/// - `Ok(())` - Job registered
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn add_status_job(
    scheduler: &JobScheduler,
    db: DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
    cron: &str,
) -> Result<(), AppError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let gateway = gateway.clone();

        Box::pin(async move {
            if let Err(e) = StatusService::new(&db, gateway).announce_all().await {
                tracing::error!("Error posting status announcements: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;

    tracing::info!("Status announcements scheduled with {}", cron);

    Ok(())
}
