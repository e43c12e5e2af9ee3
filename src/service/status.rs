//! Status announcements: per-guild templates posted in rotation to the giveaway channel.
//!
//! Each post renders the next template with the open giveaway's figures and moves that
//! template to the back of the rotation. A failed send leaves the rotation untouched so
//! the same template is tried again on the next run.

use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        giveaway::GiveawayRepository, participant::ParticipantRepository,
        server_config::ServerConfigRepository, status_template::StatusTemplateRepository,
    },
    error::{settings::StatusTemplateError, AppError},
    gateway::DiscordGateway,
    model::{
        participant::ThxState,
        status::{StatusBatchReport, StatusFigures, StatusOutcome, StatusTemplate},
    },
    service::builder,
};

/// Longest template accepted, leaving room under Discord's 2000 character limit for
/// the substituted figures.
pub const MAX_TEMPLATE_LEN: usize = 1800;

pub const MAX_TEMPLATES_PER_GUILD: usize = 25;

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: Arc<dyn DiscordGateway>) -> Self {
        Self { db, gateway }
    }

    /// Stores a new template for a guild.
    ///
    /// # Returns
    /// - `Ok(StatusTemplate)` - The stored template, first in line for the next post
    /// - `Err(AppError::StatusTemplateErr)` - Empty, too long, or the guild is at its limit
    pub async fn add_template(
        &self,
        guild_id: u64,
        content: &str,
    ) -> Result<StatusTemplate, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StatusTemplateError::Empty.into());
        }
        if content.chars().count() > MAX_TEMPLATE_LEN {
            return Err(StatusTemplateError::TooLong {
                max: MAX_TEMPLATE_LEN,
            }
            .into());
        }

        let repo = StatusTemplateRepository::new(self.db);
        if repo.count(guild_id).await? >= MAX_TEMPLATES_PER_GUILD as u64 {
            return Err(StatusTemplateError::TooMany {
                max: MAX_TEMPLATES_PER_GUILD,
            }
            .into());
        }

        let template = repo.create(guild_id, content).await?;
        tracing::info!("Added status template {} in guild {}", template.id, guild_id);

        Ok(template)
    }

    pub async fn remove_template(&self, guild_id: u64, id: i32) -> Result<bool, AppError> {
        Ok(StatusTemplateRepository::new(self.db)
            .delete(guild_id, id)
            .await?)
    }

    pub async fn list_templates(&self, guild_id: u64) -> Result<Vec<StatusTemplate>, AppError> {
        Ok(StatusTemplateRepository::new(self.db).list(guild_id).await?)
    }

    /// Posts the guild's next template to its giveaway channel.
    ///
    /// # Returns
    /// - `Ok(StatusOutcome::Posted)` - Posted and moved to the back of the rotation
    /// - `Ok(StatusOutcome::NoTemplates)` - The guild has no templates
    /// - `Ok(StatusOutcome::NoChannel)` - No giveaway channel is configured
    /// - `Err(AppError)` - Database or Discord failure; the rotation is unchanged
    pub async fn announce(&self, guild_id: u64) -> Result<StatusOutcome, AppError> {
        let repo = StatusTemplateRepository::new(self.db);
        let Some(template) = repo.next_in_rotation(guild_id).await? else {
            return Ok(StatusOutcome::NoTemplates);
        };

        let channel_id = ServerConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .and_then(|config| config.giveaway_channel_id);
        let Some(channel_id) = channel_id else {
            return Ok(StatusOutcome::NoChannel);
        };

        let figures = self.figures(guild_id).await?;
        let message_id = self
            .gateway
            .send_message(channel_id, builder::status_message(&template.content, &figures))
            .await?;

        repo.mark_posted(template.id, Utc::now()).await?;

        Ok(StatusOutcome::Posted {
            template_id: template.id,
            message_id,
        })
    }

    /// Posts the next template in every guild that has templates.
    ///
    /// A failure in one guild is logged and counted; the remaining guilds are still
    /// processed.
    pub async fn announce_all(&self) -> Result<StatusBatchReport, AppError> {
        let guild_ids = StatusTemplateRepository::new(self.db).guild_ids().await?;
        let mut report = StatusBatchReport::default();

        for guild_id in guild_ids {
            match self.announce(guild_id).await {
                Ok(StatusOutcome::Posted { .. }) => report.posted += 1,
                Ok(outcome) => {
                    tracing::debug!("Skipped status in guild {}: {:?}", guild_id, outcome);
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to post status in guild {}: {}", guild_id, e);
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "Status batch finished: {} posted, {} skipped, {} failed",
            report.posted,
            report.skipped,
            report.failed
        );

        Ok(report)
    }

    async fn figures(&self, guild_id: u64) -> Result<StatusFigures, AppError> {
        let Some(giveaway) = GiveawayRepository::new(self.db).find_open(guild_id).await? else {
            return Ok(StatusFigures::default());
        };

        let participants = ParticipantRepository::new(self.db)
            .find_by_giveaway(giveaway.id)
            .await?;

        let accepted: Vec<u64> = participants
            .iter()
            .filter(|p| p.state == ThxState::Accepted)
            .map(|p| p.user_id)
            .collect();

        Ok(StatusFigures {
            entries: accepted.len(),
            pending: participants
                .iter()
                .filter(|p| p.state == ThxState::Pending)
                .count(),
            participants: accepted.iter().collect::<HashSet<_>>().len(),
            since: Some(giveaway.start_time),
        })
    }
}
