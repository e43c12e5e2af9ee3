//! Message builders shared by the giveaway and thx services.
//!
//! Every message the bot posts is built here so thx messages, mirrors and
//! announcements render the same way on creation and on later edits.

use std::collections::HashSet;

use crate::{
    gateway::{ButtonKind, OutboundEmbed, OutboundField, OutboundMessage},
    model::{
        candidate::ParticipantCandidate,
        giveaway::Giveaway,
        notification::NotificationStatus,
        participant::{Participant, ThxState},
        status::StatusFigures,
    },
};

/// Button accepting a thx entry.
pub const THX_ACCEPT_ID: &str = "thx:accept";
/// Button rejecting a thx entry.
pub const THX_REJECT_ID: &str = "thx:reject";
/// Button revealing the code to the giveaway winner.
pub const REVEAL_CODE_ID: &str = "giveaway:reveal";

const GIVEAWAY_COLOR: u32 = 0x5865F2;
const NO_WINNER_COLOR: u32 = 0x95a5a6;

pub fn status_for(state: ThxState) -> NotificationStatus {
    match state {
        ThxState::Pending => NotificationStatus::Wait,
        ThxState::Accepted => NotificationStatus::Confirm,
        ThxState::Rejected => NotificationStatus::Reject,
    }
}

/// Builds a Discord message link.
pub fn message_link(guild_id: u64, channel_id: u64, message_id: u64) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id, channel_id, message_id
    )
}

/// Builds the public thx message carrying the moderation buttons.
///
/// Buttons stay attached while the giveaway is open so moderators can flip a decision;
/// `open` false renders the final state without controls.
///
/// # Arguments
/// - `target_id` - The thanked user
/// - `thanked_by` - Mention of whoever gave the thx, if known
/// - `reason` - Optional free-text reason
/// - `state` - Current moderation state
/// - `open` - Whether the entry can still be moderated
pub fn thx_message(
    target_id: u64,
    thanked_by: Option<&str>,
    reason: Option<&str>,
    state: ThxState,
    open: bool,
) -> OutboundMessage {
    let status = status_for(state);
    let mut description = match thanked_by {
        Some(thanked_by) => format!("{} thanked <@{}>", thanked_by, target_id),
        None => format!("<@{}> was thanked", target_id),
    };
    if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
        description.push_str(&format!("\n> {}", reason.trim()));
    }

    let embed = OutboundEmbed::new("Thx", description, status.color()).field(
        "Status",
        status.label(),
        true,
    );

    let message = OutboundMessage::embed(embed);
    if !open {
        return message;
    }

    message
        .button(THX_ACCEPT_ID, "Accept", ButtonKind::Success)
        .button(THX_REJECT_ID, "Reject", ButtonKind::Danger)
}

/// Rebuilds the thx message of a stored participant after a moderation change.
pub fn participant_message(participant: &Participant, open: bool) -> OutboundMessage {
    let mut message = thx_message(participant.user_id, None, None, participant.state, open);

    if let (Some(embed), Some(moderator)) = (
        message.embed.as_mut(),
        participant.accept_user_name.as_deref(),
    ) {
        embed.fields.push(OutboundField {
            name: "Moderator".to_string(),
            value: moderator.to_string(),
            inline: true,
        });
    }

    message
}

/// Builds the nomination message the approver reacts to.
pub fn nomination_message(candidate_id: u64, approver_id: u64, state: ThxState) -> OutboundMessage {
    let status = status_for(state);
    let description = match state {
        ThxState::Pending => format!(
            "<@{}> asks <@{}> for a thx. React with ✅ to accept or ❌ to reject.",
            candidate_id, approver_id
        ),
        _ => format!("<@{}> asked <@{}> for a thx.", candidate_id, approver_id),
    };

    OutboundMessage::embed(
        OutboundEmbed::new("Thx request", description, status.color()).field(
            "Status",
            status.label(),
            true,
        ),
    )
}

/// Builds the moderator-facing mirror of a thx entry.
pub fn thx_notification(participant: &Participant) -> OutboundMessage {
    let status = status_for(participant.state);
    let link = message_link(
        participant.guild_id,
        participant.channel_id,
        participant.message_id,
    );

    let mut embed = OutboundEmbed::new(
        "Thx",
        format!("<@{}> was thanked: [jump]({})", participant.user_id, link),
        status.color(),
    )
    .field("Status", status.label(), true);

    if let Some(moderator) = participant.accept_user_name.as_deref() {
        embed = embed.field("Moderator", moderator, true);
    }

    OutboundMessage::embed(embed)
}

/// Builds the moderator-facing mirror of a nomination.
pub fn nomination_notification(candidate: &ParticipantCandidate) -> OutboundMessage {
    let status = status_for(candidate.state);
    let link = message_link(candidate.guild_id, candidate.channel_id, candidate.message_id);

    OutboundMessage::embed(
        OutboundEmbed::new(
            "Thx request",
            format!(
                "<@{}> asked <@{}> for a thx: [jump]({})",
                candidate.candidate_id, candidate.approver_id, link
            ),
            status.color(),
        )
        .field("Status", status.label(), true),
    )
}

/// Builds the public winner announcement with the reveal button.
pub fn winner_announcement(giveaway: &Giveaway, winner_id: u64) -> OutboundMessage {
    OutboundMessage::embed(
        OutboundEmbed::new(
            "Giveaway closed",
            format!(
                "Congratulations <@{}>! Use the button below to reveal your code.",
                winner_id
            ),
            GIVEAWAY_COLOR,
        )
        .footer(format!("Giveaway #{}", giveaway.id)),
    )
    .button(REVEAL_CODE_ID, "Reveal code", ButtonKind::Primary)
}

/// Builds the announcement for a giveaway closed without accepted thx.
pub fn no_winner_announcement(giveaway: &Giveaway) -> OutboundMessage {
    OutboundMessage::embed(
        OutboundEmbed::new(
            "Giveaway closed",
            "Nobody received an accepted thx this cycle, so there is no winner.",
            NO_WINNER_COLOR,
        )
        .footer(format!("Giveaway #{}", giveaway.id)),
    )
}

pub fn code_direct_message(guild_id: u64, code: &str) -> OutboundMessage {
    OutboundMessage::text(format!(
        "You won the thx giveaway in server {}! Your code: `{}`",
        guild_id, code
    ))
}

/// Builds the roster of the open giveaway for `/giveaway`.
pub fn roster_message(
    giveaway: Option<&Giveaway>,
    participants: &[Participant],
) -> OutboundMessage {
    let Some(giveaway) = giveaway else {
        return OutboundMessage::embed(OutboundEmbed::new(
            "Giveaway",
            "No giveaway is open.",
            NO_WINNER_COLOR,
        ));
    };

    let accepted = participants
        .iter()
        .filter(|p| p.state == ThxState::Accepted)
        .count();
    let pending = participants
        .iter()
        .filter(|p| p.state == ThxState::Pending)
        .count();

    let mut seen = HashSet::new();
    let lines: Vec<String> = participants
        .iter()
        .filter(|p| p.state == ThxState::Accepted && seen.insert(p.user_id))
        .map(|p| format!("• <@{}>", p.user_id))
        .collect();
    let description = if lines.is_empty() {
        "No accepted thx yet.".to_string()
    } else {
        lines.join("\n")
    };

    OutboundMessage::embed(
        OutboundEmbed::new("Giveaway", description, GIVEAWAY_COLOR)
            .field("Accepted entries", accepted.to_string(), true)
            .field("Pending", pending.to_string(), true)
            .field(
                "Started",
                format!("<t:{}:R>", giveaway.start_time.timestamp()),
                true,
            )
            .footer(format!("Giveaway #{}", giveaway.id)),
    )
}

/// Fills the placeholders of a status template.
///
/// Unknown placeholders are left as written. `{since}` renders as a relative Discord
/// timestamp, or `-` when no giveaway is open.
pub fn render_status(content: &str, figures: &StatusFigures) -> String {
    let since = figures
        .since
        .map(|since| format!("<t:{}:R>", since.timestamp()))
        .unwrap_or_else(|| "-".to_string());

    content
        .replace("{entries}", &figures.entries.to_string())
        .replace("{pending}", &figures.pending.to_string())
        .replace("{participants}", &figures.participants.to_string())
        .replace("{since}", &since)
}

/// Builds a status announcement as a plain text post.
pub fn status_message(content: &str, figures: &StatusFigures) -> OutboundMessage {
    OutboundMessage::text(render_status(content, figures))
}
