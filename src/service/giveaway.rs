//! Giveaway lifecycle: opening cycles, closing them with a fair draw and answering
//! winner queries.
//!
//! Closing runs in a single database transaction. The open giveaway is claimed with a
//! compare-and-swap on `end_time`, the winner is drawn from the accepted entries and the
//! code is requested before anything is committed. A voucher failure rolls the claim
//! back so the giveaway stays open for the next cycle. Discord side effects run only
//! after the commit and never undo it.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    data::{
        giveaway::GiveawayRepository, participant::ParticipantRepository,
        server_config::ServerConfigRepository,
    },
    error::AppError,
    gateway::{DiscordGateway, OutboundMessage},
    model::{
        giveaway::{BatchReport, CloseOutcome, Giveaway, GiveawayWinnerParam},
        participant::Participant,
        server_config::ServerConfig,
    },
    service::builder,
    voucher::VoucherClient,
};

/// Picks a winner uniformly from the accepted entries.
///
/// Every entry has the same probability; a user with several accepted thx holds
/// several entries. Returns `None` for an empty pool.
pub fn pick_winner<'p, R: Rng + ?Sized>(
    pool: &'p [Participant],
    rng: &mut R,
) -> Option<&'p Participant> {
    if pool.is_empty() {
        return None;
    }

    pool.get(rng.random_range(0..pool.len()))
}

/// Returns the open giveaway of a guild, opening one if none exists.
///
/// The `idx_giveaway_open_guild_id` unique index rejects a second open row for the
/// guild. A caller losing the insert race reads the winner's row instead.
pub async fn ensure_open_giveaway(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<Giveaway, AppError> {
    let repo = GiveawayRepository::new(db);

    if let Some(open) = repo.find_open(guild_id).await? {
        return Ok(open);
    }

    match repo.create_open(guild_id, Utc::now()).await {
        Ok(giveaway) => {
            tracing::info!("Opened giveaway {} in guild {}", giveaway.id, guild_id);

            Ok(giveaway)
        }
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::debug!("Giveaway of guild {} was opened concurrently", guild_id);

            repo.find_open(guild_id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Open giveaway of guild {}", guild_id))
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
    voucher: Arc<dyn VoucherClient>,
}

impl<'a> GiveawayService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: Arc<dyn DiscordGateway>,
        voucher: Arc<dyn VoucherClient>,
    ) -> Self {
        Self {
            db,
            gateway,
            voucher,
        }
    }

    /// Returns the open giveaway of a guild, opening one if none exists.
    pub async fn ensure_open(&self, guild_id: u64) -> Result<Giveaway, AppError> {
        ensure_open_giveaway(self.db, guild_id).await
    }

    /// Closes the open giveaway of a guild.
    ///
    /// The claim holds the row lock until commit, including while the voucher code is
    /// requested (up to two attempts of `VOUCHER_TIMEOUT`). On SQLite that lock covers the
    /// whole database, so thx written during a slow voucher request wait on it and fail
    /// once the driver's busy timeout runs out. Requesting the code before the claim
    /// would free the lock but could consume a code for a close that then loses the race.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(CloseOutcome::NothingToClose)` - The guild has no open giveaway
    /// - `Ok(CloseOutcome::AlreadyClosed)` - A concurrent close committed first
    /// - `Ok(CloseOutcome::NoWinner)` - Closed without accepted entries; no code requested
    /// - `Ok(CloseOutcome::Won)` - Closed with a winner and code
    /// - `Err(AppError::Voucher)` - No code could be obtained; the giveaway stays open
    /// - `Err(AppError::DbErr)` - Database error; the giveaway stays open
    pub async fn close(&self, guild_id: u64) -> Result<CloseOutcome, AppError> {
        let txn = self.db.begin().await?;
        let giveaway_repo = GiveawayRepository::new(&txn);

        let Some(giveaway) = giveaway_repo.find_open(guild_id).await? else {
            txn.rollback().await?;
            return Ok(CloseOutcome::NothingToClose);
        };

        if !giveaway_repo.claim_close(giveaway.id, Utc::now()).await? {
            txn.rollback().await?;
            tracing::info!(
                "Giveaway {} in guild {} was closed concurrently",
                giveaway.id,
                guild_id
            );
            return Ok(CloseOutcome::AlreadyClosed);
        }

        let pool = ParticipantRepository::new(&txn)
            .find_accepted_by_giveaway(giveaway.id)
            .await?;
        let config = ServerConfigRepository::new(&txn)
            .find_by_guild_id(guild_id)
            .await?;

        // ThreadRng is not Send; keep it out of any await
        let winner = {
            let mut rng = rand::rng();
            pick_winner(&pool, &mut rng).cloned()
        };

        let Some(winner) = winner else {
            txn.commit().await?;
            tracing::info!(
                "Closed giveaway {} in guild {} without a winner",
                giveaway.id,
                guild_id
            );
            self.announce(
                &giveaway,
                config.as_ref(),
                builder::no_winner_announcement(&giveaway),
            )
            .await;
            return Ok(CloseOutcome::NoWinner {
                giveaway_id: giveaway.id,
            });
        };

        let code = match self.voucher.request_code().await {
            Ok(code) => code,
            Err(e) => {
                txn.rollback().await?;
                tracing::error!(
                    "Leaving giveaway {} in guild {} open, no voucher code: {}",
                    giveaway.id,
                    guild_id,
                    e
                );
                return Err(e);
            }
        };

        giveaway_repo
            .set_winner(
                giveaway.id,
                GiveawayWinnerParam {
                    winner_id: winner.user_id,
                    winner_name: winner.user_name.clone(),
                    code: code.clone(),
                },
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Closed giveaway {} in guild {}, winner {} out of {} entries",
            giveaway.id,
            guild_id,
            winner.user_id,
            pool.len()
        );

        self.announce(
            &giveaway,
            config.as_ref(),
            builder::winner_announcement(&giveaway, winner.user_id),
        )
        .await;

        let code_delivered = match self
            .gateway
            .send_direct_message(winner.user_id, builder::code_direct_message(guild_id, &code))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    "Failed to send code of giveaway {} to winner {}, manual resend needed: {}",
                    giveaway.id,
                    winner.user_id,
                    e
                );
                false
            }
        };

        Ok(CloseOutcome::Won {
            giveaway_id: giveaway.id,
            winner_id: winner.user_id,
            code_delivered,
        })
    }

    /// Posts a close announcement and records its message on the giveaway.
    ///
    /// Runs after the close committed, so failures are logged and never undo it.
    async fn announce(
        &self,
        giveaway: &Giveaway,
        config: Option<&ServerConfig>,
        message: OutboundMessage,
    ) {
        let Some(channel_id) = config.and_then(|c| c.giveaway_channel_id) else {
            tracing::warn!(
                "No giveaway channel configured for guild {}, skipping announcement",
                giveaway.guild_id
            );
            return;
        };

        let message_id = match self.gateway.send_message(channel_id, message).await {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::error!(
                    "Failed to announce giveaway {} in channel {}: {}",
                    giveaway.id,
                    channel_id,
                    e
                );
                return;
            }
        };

        if let Err(e) = GiveawayRepository::new(self.db)
            .set_info_message_id(giveaway.id, message_id)
            .await
        {
            tracing::error!(
                "Failed to record announcement of giveaway {}: {}",
                giveaway.id,
                e
            );
        }
    }

    /// Closes and re-opens the giveaway of every guild with an open cycle.
    ///
    /// A failure in one guild is logged and counted; the remaining guilds are still
    /// processed. A guild whose close failed keeps its open giveaway for the next run.
    pub async fn batch_close_due(&self) -> Result<BatchReport, AppError> {
        let guild_ids = GiveawayRepository::new(self.db).open_guild_ids().await?;
        let mut report = BatchReport::default();

        for guild_id in guild_ids {
            match self.close(guild_id).await {
                Ok(CloseOutcome::NoWinner { .. }) | Ok(CloseOutcome::Won { .. }) => {
                    report.closed += 1;
                }
                Ok(outcome) => {
                    tracing::debug!("Skipped guild {}: {:?}", guild_id, outcome);
                }
                Err(e) => {
                    tracing::error!("Failed to close giveaway in guild {}: {}", guild_id, e);
                    report.failed += 1;
                    continue;
                }
            }

            if let Err(e) = self.ensure_open(guild_id).await {
                tracing::error!("Failed to open giveaway in guild {}: {}", guild_id, e);
                report.failed += 1;
            }
        }

        tracing::info!(
            "Giveaway batch finished: {} closed, {} failed",
            report.closed,
            report.failed
        );

        Ok(report)
    }

    /// Checks whether a user is the recorded winner of the giveaway announced in a message.
    pub async fn has_won(&self, message_id: u64, user_id: u64) -> Result<bool, AppError> {
        let giveaway = GiveawayRepository::new(self.db)
            .find_by_info_message_id(message_id)
            .await?;

        Ok(giveaway.and_then(|g| g.winner_id) == Some(user_id))
    }

    /// Gets the code awarded in the giveaway announced in a message.
    pub async fn code_for(&self, message_id: u64) -> Result<Option<String>, AppError> {
        let giveaway = GiveawayRepository::new(self.db)
            .find_by_info_message_id(message_id)
            .await?;

        Ok(giveaway.and_then(|g| g.code))
    }

    /// Gets the open giveaway of a guild and all of its entries.
    pub async fn current_participants(
        &self,
        guild_id: u64,
    ) -> Result<(Option<Giveaway>, Vec<Participant>), AppError> {
        let Some(giveaway) = GiveawayRepository::new(self.db).find_open(guild_id).await? else {
            return Ok((None, Vec::new()));
        };

        let participants = ParticipantRepository::new(self.db)
            .find_by_giveaway(giveaway.id)
            .await?;

        Ok((Some(giveaway), participants))
    }
}
