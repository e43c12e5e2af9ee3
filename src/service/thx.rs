//! Thx workflow: direct thx, moderation and nominations.
//!
//! A direct thx creates a pending entry in the guild's open giveaway, opening one if
//! needed. Moderators accept or reject it through buttons or reactions, and may flip the
//! decision while the giveaway is open. A nomination asks a named approver to thank the
//! candidate. Only that approver can resolve it, exactly once, and acceptance enters the
//! candidate through the same path as a direct thx.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::Permissions;

use crate::{
    data::{
        blacklist::BlacklistRepository, candidate::ParticipantCandidateRepository,
        giveaway::GiveawayRepository, participant::ParticipantRepository,
        server_config::ServerConfigRepository,
    },
    error::AppError,
    gateway::{DiscordGateway, MemberInfo, OutboundMessage},
    model::{
        blacklist::BlacklistKind,
        candidate::{
            CreateCandidateParam, NominationOutcome, NominationResolution, ParticipantCandidate,
        },
        decision::{Decision, ACCEPT_EMOJI, REJECT_EMOJI},
        participant::{
            CreateParticipantParam, Moderator, Participant, ThxOutcome, ThxRejection,
            ThxResolution, ThxState,
        },
    },
    service::{
        builder, giveaway::ensure_open_giveaway, helper::HelperService,
        notification::ThxNotificationService,
    },
};

/// A direct thx given through `/thx`.
#[derive(Debug, Clone)]
pub struct RecordThxParam {
    pub guild_id: u64,
    pub channel_id: u64,
    /// Member giving the thx.
    pub actor: MemberInfo,
    /// Member being thanked.
    pub target: MemberInfo,
    pub reason: Option<String>,
}

/// A nomination created through `/candidate`.
#[derive(Debug, Clone)]
pub struct NominateParam {
    pub guild_id: u64,
    pub channel_id: u64,
    /// Member asking for the thx.
    pub candidate: MemberInfo,
    /// Member asked to give it.
    pub approver: MemberInfo,
}

/// A new pending entry, shared by direct thx and accepted nominations.
struct EntryParam {
    guild_id: u64,
    channel_id: u64,
    user_id: u64,
    user_name: String,
    thanked_by: u64,
    reason: Option<String>,
}

pub struct ThxService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
}

impl<'a> ThxService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: Arc<dyn DiscordGateway>) -> Self {
        Self { db, gateway }
    }

    /// Checks the thx guards, in order: self-thx, automated target, blacklisted target.
    async fn check_guards(
        &self,
        guild_id: u64,
        giver_id: u64,
        target: &MemberInfo,
    ) -> Result<Option<ThxRejection>, AppError> {
        if target.user_id == giver_id {
            return Ok(Some(ThxRejection::SelfThx));
        }
        if target.is_bot {
            return Ok(Some(ThxRejection::BotTarget));
        }

        let blacklisted = BlacklistRepository::new(self.db)
            .contains(BlacklistKind::Thx, guild_id, target.user_id)
            .await?;
        if blacklisted {
            return Ok(Some(ThxRejection::Blacklisted));
        }

        Ok(None)
    }

    /// Records a direct thx.
    ///
    /// # Arguments
    /// - `param` - Guild, channel, giver, thanked member and optional reason
    ///
    /// # Returns
    /// - `Ok(ThxOutcome::Recorded)` - A pending entry was created in the open giveaway
    /// - `Ok(ThxOutcome::Refused)` - A guard refused the thx; nothing was written
    /// - `Err(AppError)` - Database error or the thx message could not be posted
    pub async fn record_thx(&self, param: RecordThxParam) -> Result<ThxOutcome, AppError> {
        if let Some(rejection) = self
            .check_guards(param.guild_id, param.actor.user_id, &param.target)
            .await?
        {
            tracing::debug!(
                "Refused thx from {} to {}: {:?}",
                param.actor.user_id,
                param.target.user_id,
                rejection
            );
            return Ok(ThxOutcome::Refused(rejection));
        }

        let participant = self
            .enter(EntryParam {
                guild_id: param.guild_id,
                channel_id: param.channel_id,
                user_id: param.target.user_id,
                user_name: param.target.display_name,
                thanked_by: param.actor.user_id,
                reason: param.reason,
            })
            .await?;

        Ok(ThxOutcome::Recorded(participant))
    }

    /// Posts the thx message and creates the pending entry in the open giveaway.
    async fn enter(&self, param: EntryParam) -> Result<Participant, AppError> {
        let giveaway = ensure_open_giveaway(self.db, param.guild_id).await?;

        let thanked_by = format!("<@{}>", param.thanked_by);
        let message = builder::thx_message(
            param.user_id,
            Some(&thanked_by),
            param.reason.as_deref(),
            ThxState::Pending,
            true,
        );
        let message_id = self.gateway.send_message(param.channel_id, message).await?;
        self.add_decision_reactions(param.channel_id, message_id)
            .await;

        let participant = ParticipantRepository::new(self.db)
            .create(CreateParticipantParam {
                giveaway_id: giveaway.id,
                guild_id: param.guild_id,
                user_id: param.user_id,
                user_name: param.user_name,
                channel_id: param.channel_id,
                message_id,
            })
            .await?;

        tracing::info!(
            "{} thanked {} in giveaway {} of guild {}",
            param.thanked_by,
            participant.user_id,
            giveaway.id,
            param.guild_id
        );

        self.mirror(param.guild_id, message_id, builder::thx_notification(&participant))
            .await;

        Ok(participant)
    }

    /// Applies a moderator's decision to a thx entry.
    ///
    /// Buttons and reactions both land here. Moderators hold the guild's admin role or
    /// the `MANAGE_MESSAGES` permission.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the interaction happened in
    /// - `message_id` - The thx message
    /// - `moderator` - Member acting on the entry
    /// - `decision` - Accept or reject
    ///
    /// # Returns
    /// - `Ok(ThxResolution::Resolved)` - State changed; message, mirror and helper role updated
    /// - `Ok(ThxResolution::Unchanged)` - The entry already had that state
    /// - `Ok(ThxResolution::NotAllowed)` - The member is not a moderator
    /// - `Ok(ThxResolution::GiveawayClosed)` - The entry's giveaway is closed
    /// - `Ok(ThxResolution::NotFound)` - The message is not a thx message of this guild
    pub async fn resolve_thx(
        &self,
        guild_id: u64,
        message_id: u64,
        moderator: Moderator,
        decision: Decision,
    ) -> Result<ThxResolution, AppError> {
        let repo = ParticipantRepository::new(self.db);

        let Some(participant) = repo.find_by_message_id(message_id).await? else {
            return Ok(ThxResolution::NotFound);
        };
        if participant.guild_id != guild_id {
            return Ok(ThxResolution::NotFound);
        }

        if !self.is_moderator(guild_id, moderator.user_id).await? {
            tracing::debug!(
                "{} tried to moderate thx {} without permission",
                moderator.user_id,
                message_id
            );
            return Ok(ThxResolution::NotAllowed);
        }

        let giveaway = GiveawayRepository::new(self.db)
            .find_by_id(participant.giveaway_id)
            .await?;
        if !giveaway.is_some_and(|g| g.is_open()) {
            return Ok(ThxResolution::GiveawayClosed);
        }

        let requested = match decision {
            Decision::Accept => ThxState::Accepted,
            Decision::Reject => ThxState::Rejected,
        };
        if participant.state == requested {
            return Ok(ThxResolution::Unchanged);
        }

        let Some(updated) = repo
            .set_state(participant.id, decision.is_accepted(), &moderator)
            .await?
        else {
            return Ok(ThxResolution::NotFound);
        };

        tracing::info!(
            "{} set thx {} for {} to {:?}",
            moderator.user_id,
            message_id,
            updated.user_id,
            updated.state
        );

        if let Err(e) = self
            .gateway
            .edit_message(
                updated.channel_id,
                updated.message_id,
                builder::participant_message(&updated, true),
            )
            .await
        {
            tracing::warn!("Failed to update thx message {}: {}", message_id, e);
        }

        self.mirror(guild_id, message_id, builder::thx_notification(&updated))
            .await;

        if let Err(e) = HelperService::new(self.db, self.gateway.clone())
            .recompute_helper(guild_id, updated.user_id)
            .await
        {
            tracing::error!(
                "Failed to recompute helper role of {} in guild {}: {}",
                updated.user_id,
                guild_id,
                e
            );
        }

        Ok(ThxResolution::Resolved(updated))
    }

    /// Creates a nomination asking `approver` to thank the candidate.
    ///
    /// The thx guards apply to the candidate as the thanked member. Both members must be
    /// human.
    pub async fn nominate(&self, param: NominateParam) -> Result<NominationOutcome, AppError> {
        let rejection = if param.approver.is_bot {
            Some(ThxRejection::BotTarget)
        } else {
            self.check_guards(param.guild_id, param.approver.user_id, &param.candidate)
                .await?
        };
        if let Some(rejection) = rejection {
            return Ok(NominationOutcome::Refused(rejection));
        }

        let message = builder::nomination_message(
            param.candidate.user_id,
            param.approver.user_id,
            ThxState::Pending,
        );
        let message_id = self.gateway.send_message(param.channel_id, message).await?;
        self.add_decision_reactions(param.channel_id, message_id)
            .await;

        let candidate = ParticipantCandidateRepository::new(self.db)
            .create(CreateCandidateParam {
                guild_id: param.guild_id,
                candidate_id: param.candidate.user_id,
                candidate_name: param.candidate.display_name,
                approver_id: param.approver.user_id,
                approver_name: param.approver.display_name,
                channel_id: param.channel_id,
                message_id,
            })
            .await?;

        tracing::info!(
            "{} asked {} for a thx in guild {}",
            candidate.candidate_id,
            candidate.approver_id,
            candidate.guild_id
        );

        self.mirror(
            param.guild_id,
            message_id,
            builder::nomination_notification(&candidate),
        )
        .await;

        Ok(NominationOutcome::Created(candidate))
    }

    /// Resolves a nomination from its approver's reaction.
    ///
    /// # Arguments
    /// - `message_id` - The nomination message
    /// - `user_id` - Member who reacted
    /// - `decision` - Accept or reject
    ///
    /// # Returns
    /// - `Ok(NominationResolution::Accepted)` - The candidate is now a pending participant
    /// - `Ok(NominationResolution::Rejected)` - Terminal, nothing else happens
    /// - `Ok(NominationResolution::AlreadyResolved)` - An earlier reaction resolved it
    /// - `Ok(NominationResolution::NotApprover)` - The reacting member is not the approver
    /// - `Ok(NominationResolution::NotFound)` - The message is not a nomination
    /// - `Err(AppError)` - The accepted candidate could not be entered; the nomination is
    ///   pending again so the approver can retry
    pub async fn resolve_nomination(
        &self,
        message_id: u64,
        user_id: u64,
        decision: Decision,
    ) -> Result<NominationResolution, AppError> {
        let repo = ParticipantCandidateRepository::new(self.db);

        let Some(candidate) = repo.find_by_message_id(message_id).await? else {
            return Ok(NominationResolution::NotFound);
        };
        if candidate.approver_id != user_id {
            return Ok(NominationResolution::NotApprover);
        }
        if candidate.is_resolved() {
            return Ok(NominationResolution::AlreadyResolved);
        }
        // A concurrent reaction may resolve it between the read and the update
        if !repo
            .resolve_if_pending(candidate.id, decision.is_accepted())
            .await?
        {
            return Ok(NominationResolution::AlreadyResolved);
        }

        let candidate = repo
            .find_by_id(candidate.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Nomination {}", candidate.id)))?;

        tracing::info!(
            "{} resolved the thx request of {} as {:?}",
            candidate.approver_id,
            candidate.candidate_id,
            candidate.state
        );

        match decision {
            Decision::Reject => {
                self.refresh_nomination(&candidate).await;

                Ok(NominationResolution::Rejected(candidate))
            }
            Decision::Accept => {
                let entry = self
                    .enter(EntryParam {
                        guild_id: candidate.guild_id,
                        channel_id: candidate.channel_id,
                        user_id: candidate.candidate_id,
                        user_name: candidate.candidate_name.clone(),
                        thanked_by: candidate.approver_id,
                        reason: None,
                    })
                    .await;

                let participant = match entry {
                    Ok(participant) => participant,
                    Err(e) => {
                        // Without an entry the acceptance must stay retryable
                        if let Err(revert) = repo.reopen_if_accepted(candidate.id).await {
                            tracing::error!(
                                "Failed to reopen nomination {} after a failed entry: {}",
                                candidate.id,
                                revert
                            );
                        }
                        return Err(e);
                    }
                };

                self.refresh_nomination(&candidate).await;

                Ok(NominationResolution::Accepted {
                    candidate,
                    participant,
                })
            }
        }
    }

    /// Checks whether a member may moderate thx in a guild.
    pub async fn is_moderator(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let config = ServerConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?;

        if let Some(admin_role_id) = config.admin_role_id {
            let member = self.gateway.member(guild_id, user_id).await?;
            if member.is_some_and(|m| m.has_role(admin_role_id)) {
                return Ok(true);
            }
        }

        self.gateway
            .has_permission(guild_id, user_id, Permissions::MANAGE_MESSAGES)
            .await
    }

    async fn refresh_nomination(&self, candidate: &ParticipantCandidate) {
        if let Err(e) = self
            .gateway
            .edit_message(
                candidate.channel_id,
                candidate.message_id,
                builder::nomination_message(
                    candidate.candidate_id,
                    candidate.approver_id,
                    candidate.state,
                ),
            )
            .await
        {
            tracing::warn!(
                "Failed to update nomination message {}: {}",
                candidate.message_id,
                e
            );
        }

        self.mirror(
            candidate.guild_id,
            candidate.message_id,
            builder::nomination_notification(candidate),
        )
        .await;
    }

    async fn add_decision_reactions(&self, channel_id: u64, message_id: u64) {
        for emoji in [ACCEPT_EMOJI, REJECT_EMOJI] {
            if let Err(e) = self
                .gateway
                .add_reaction(channel_id, message_id, emoji)
                .await
            {
                tracing::warn!("Failed to add {} to message {}: {}", emoji, message_id, e);
            }
        }
    }

    async fn mirror(&self, guild_id: u64, origin_message_id: u64, message: OutboundMessage) {
        if let Err(e) = ThxNotificationService::new(self.db, self.gateway.clone())
            .upsert(guild_id, origin_message_id, message)
            .await
        {
            tracing::error!(
                "Failed to mirror message {} to the thx-info channel: {}",
                origin_message_id,
                e
            );
        }
    }
}
