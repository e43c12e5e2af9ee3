//! ✅/❌ reactions on thx and nomination messages.
//!
//! A reaction is first tried as a moderator decision on a thx message, then as the
//! approver's decision on a nomination. Reactions the member was not entitled to make
//! are removed so the message reflects only valid decisions.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Reaction, ReactionType};

use crate::{
    bot::handler::{gateway, reply},
    model::{
        candidate::NominationResolution,
        decision::Decision,
        participant::{Moderator, ThxResolution},
    },
    service::thx::ThxService,
};

/// Handles the reaction_add event.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `reaction` - The added reaction
pub async fn handle_reaction_add(db: &DatabaseConnection, ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };

    // The bot seeds its own messages with both reactions
    if user_id == ctx.cache.current_user().id
        || reaction.member.as_ref().is_some_and(|m| m.user.bot)
    {
        return;
    }

    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return;
    };
    let Some(decision) = Decision::from_emoji(emoji) else {
        return;
    };

    let message_id = reaction.message_id.get();
    let gateway = gateway(&ctx);
    let service = ThxService::new(db, gateway.clone());

    let moderator = Moderator {
        user_id: user_id.get(),
        name: reaction
            .member
            .as_ref()
            .map(|m| m.display_name().to_string())
            .unwrap_or_else(|| user_id.to_string()),
    };

    let revert = match service
        .resolve_thx(guild_id.get(), message_id, moderator, decision)
        .await
    {
        Ok(ThxResolution::NotAllowed) => true,
        Ok(ThxResolution::NotFound) => {
            match service
                .resolve_nomination(message_id, user_id.get(), decision)
                .await
            {
                Ok(NominationResolution::NotApprover) => true,
                Ok(resolution) => {
                    tracing::debug!(
                        "Reaction {} on nomination {} by {}: {}",
                        emoji,
                        message_id,
                        user_id,
                        reply::nomination_resolution_label(&resolution)
                    );
                    false
                }
                Err(e) => {
                    tracing::error!("Failed to resolve nomination {}: {}", message_id, e);
                    false
                }
            }
        }
        Ok(resolution) => {
            tracing::debug!(
                "Reaction {} on thx {} by {}: {}",
                emoji,
                message_id,
                user_id,
                reply::thx_resolution_text(&resolution)
            );
            false
        }
        Err(e) => {
            tracing::error!("Failed to resolve thx {}: {}", message_id, e);
            false
        }
    };

    if revert {
        if let Err(e) = gateway
            .remove_reaction(reaction.channel_id.get(), message_id, user_id.get(), emoji)
            .await
        {
            tracing::warn!(
                "Failed to remove reaction of {} on message {}: {}",
                user_id,
                message_id,
                e
            );
        }
    }
}
