//! Text shown to members in response to commands, buttons and reactions.

use serenity::all::EditInteractionResponse;

use crate::{
    gateway::{http::build_embed, OutboundEmbed, OutboundMessage},
    model::{
        candidate::{NominationOutcome, NominationResolution},
        giveaway::CloseOutcome,
        helper::HelperSummary,
        participant::{ThxOutcome, ThxRejection, ThxResolution},
        server_config::{format_level_thresholds, ServerConfig},
        status::{StatusOutcome, StatusTemplate},
    },
};

const SETTINGS_COLOR: u32 = 0x5865F2;

pub const GENERIC_ERROR: &str = "Something went wrong, please try again later.";
pub const GUILD_ONLY: &str = "This only works inside a server.";
pub const NOT_A_MEMBER: &str = "That user is not a member of this server.";

pub fn thx_outcome_text(outcome: &ThxOutcome) -> String {
    match outcome {
        ThxOutcome::Recorded(participant) => format!(
            "Thx for <@{}> recorded. A moderator will review it.",
            participant.user_id
        ),
        ThxOutcome::Refused(ThxRejection::SelfThx) => "You can't thank yourself.".to_string(),
        ThxOutcome::Refused(ThxRejection::BotTarget) => "Bots can't receive thx.".to_string(),
        ThxOutcome::Refused(ThxRejection::Blacklisted) => {
            "That member can't receive thx.".to_string()
        }
    }
}

pub fn nomination_outcome_text(outcome: &NominationOutcome) -> String {
    match outcome {
        NominationOutcome::Created(candidate) => format!(
            "Asked <@{}> to confirm your thx request.",
            candidate.approver_id
        ),
        NominationOutcome::Refused(ThxRejection::SelfThx) => {
            "You can't ask yourself for a thx.".to_string()
        }
        NominationOutcome::Refused(ThxRejection::BotTarget) => {
            "Bots can't take part in thx requests.".to_string()
        }
        NominationOutcome::Refused(ThxRejection::Blacklisted) => {
            "You can't receive thx in this server.".to_string()
        }
    }
}

pub fn thx_resolution_text(resolution: &ThxResolution) -> &'static str {
    match resolution {
        ThxResolution::Resolved(_) => "Thx updated.",
        ThxResolution::Unchanged => "The thx already has that state.",
        ThxResolution::NotAllowed => "Only moderators can review thx.",
        ThxResolution::GiveawayClosed => "This giveaway is closed, the thx can no longer change.",
        ThxResolution::NotFound => "This thx no longer exists.",
    }
}

pub fn nomination_resolution_label(resolution: &NominationResolution) -> &'static str {
    match resolution {
        NominationResolution::Accepted { .. } => "accepted",
        NominationResolution::Rejected(_) => "rejected",
        NominationResolution::AlreadyResolved => "already resolved",
        NominationResolution::NotApprover => "not approver",
        NominationResolution::NotFound => "not found",
    }
}

pub fn close_outcome_text(outcome: &CloseOutcome) -> String {
    match outcome {
        CloseOutcome::NothingToClose => "There is no open giveaway.".to_string(),
        CloseOutcome::AlreadyClosed => "The giveaway was just closed by another draw.".to_string(),
        CloseOutcome::NoWinner { giveaway_id } => format!(
            "Closed giveaway #{} without a winner, nobody had an accepted thx.",
            giveaway_id
        ),
        CloseOutcome::Won {
            giveaway_id,
            winner_id,
            code_delivered: true,
        } => format!(
            "Closed giveaway #{}. <@{}> won and received their code.",
            giveaway_id, winner_id
        ),
        CloseOutcome::Won {
            giveaway_id,
            winner_id,
            code_delivered: false,
        } => format!(
            "Closed giveaway #{}. <@{}> won, but their DMs are closed. They can still reveal the code from the announcement.",
            giveaway_id, winner_id
        ),
    }
}

pub fn helper_summary_text(summary: &HelperSummary) -> String {
    format!(
        "Helper roles checked: {} granted, {} revoked, {} unchanged.",
        summary.granted, summary.revoked, summary.unchanged
    )
}

pub fn blacklist_text(list: &str, user_id: u64, adding: bool, changed: bool) -> String {
    match (adding, changed) {
        (true, true) => format!("Added <@{}> to the {}.", user_id, list),
        (true, false) => format!("<@{}> is already on the {}.", user_id, list),
        (false, true) => format!("Removed <@{}> from the {}.", user_id, list),
        (false, false) => format!("<@{}> is not on the {}.", user_id, list),
    }
}

pub fn settings_message(config: &ServerConfig) -> OutboundMessage {
    fn role(id: Option<u64>) -> String {
        id.map(|id| format!("<@&{}>", id))
            .unwrap_or_else(|| "not set".to_string())
    }
    fn channel(id: Option<u64>) -> String {
        id.map(|id| format!("<#{}>", id))
            .unwrap_or_else(|| "not set".to_string())
    }

    let levels = if config.level_thresholds.is_empty() {
        "none".to_string()
    } else {
        format_level_thresholds(&config.level_thresholds)
    };

    OutboundMessage::embed(
        OutboundEmbed::new("Settings", "", SETTINGS_COLOR)
            .field("Admin role", role(config.admin_role_id), true)
            .field("Helper role", role(config.helper_role_id), true)
            .field("Helper threshold", config.helper_threshold.to_string(), true)
            .field("Giveaway channel", channel(config.giveaway_channel_id), true)
            .field("Thx info channel", channel(config.thx_info_channel_id), true)
            .field(
                "Unconditional channel",
                channel(config.unconditional_channel_id),
                true,
            )
            .field(
                "Conditional channel",
                channel(config.conditional_channel_id),
                true,
            )
            .field(
                "Winners",
                format!(
                    "{} unconditional, {} conditional",
                    config.unconditional_winner_count, config.conditional_winner_count
                ),
                true,
            )
            .field("Level thresholds", levels, true),
    )
}

pub fn status_outcome_text(outcome: &StatusOutcome) -> String {
    match outcome {
        StatusOutcome::Posted { template_id, .. } => {
            format!("Posted status template #{}.", template_id)
        }
        StatusOutcome::NoTemplates => {
            "There are no status templates yet, add one with /status-add.".to_string()
        }
        StatusOutcome::NoChannel => {
            "Set a giveaway channel with /settings before posting a status.".to_string()
        }
    }
}

pub fn status_removed_text(removed: Option<i32>) -> String {
    match removed {
        Some(id) => format!("Removed status template #{}.", id),
        None => "No status template with that id exists here.".to_string(),
    }
}

/// Lists templates with their id, so administrators can remove them.
pub fn status_list_message(templates: &[StatusTemplate]) -> OutboundMessage {
    let description = if templates.is_empty() {
        "No status templates.".to_string()
    } else {
        templates
            .iter()
            .map(|t| {
                let posted = t
                    .last_posted_at
                    .map(|at| format!("<t:{}:R>", at.timestamp()))
                    .unwrap_or_else(|| "never".to_string());
                format!("**#{}** (posted {})\n{}", t.id, posted, t.content)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    OutboundMessage::embed(OutboundEmbed::new(
        "Status templates",
        description,
        SETTINGS_COLOR,
    ))
}

/// Converts a message into an edit of a deferred interaction response.
pub fn edit_response(message: OutboundMessage) -> EditInteractionResponse {
    let mut response = EditInteractionResponse::new();

    if let Some(content) = message.content {
        response = response.content(content);
    }
    if let Some(embed) = message.embed {
        response = response.embed(build_embed(embed));
    }

    response
}
