//! Button presses on thx messages and giveaway announcements.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{ComponentInteraction, Context};

use crate::{
    bot::handler::{gateway, reply},
    error::AppError,
    gateway::OutboundMessage,
    model::{decision::Decision, participant::Moderator},
    service::{
        builder::{REVEAL_CODE_ID, THX_ACCEPT_ID, THX_REJECT_ID},
        giveaway::GiveawayService,
        thx::ThxService,
    },
    voucher::VoucherClient,
};

/// Handles a button press.
///
/// Accept and reject buttons are equivalent to the ✅ and ❌ reactions. The reveal button
/// shows the giveaway code privately to the recorded winner only.
pub async fn handle_component(
    db: &DatabaseConnection,
    voucher: Arc<dyn VoucherClient>,
    ctx: Context,
    component: ComponentInteraction,
) {
    let Some(guild_id) = component.guild_id else {
        return;
    };

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer button {}: {}", component.data.custom_id, e);
        return;
    }

    let message_id = component.message.id.get();
    let user_id = component.user.id.get();

    let result = match component.data.custom_id.as_str() {
        THX_ACCEPT_ID | THX_REJECT_ID => {
            let decision = if component.data.custom_id == THX_ACCEPT_ID {
                Decision::Accept
            } else {
                Decision::Reject
            };
            let moderator = Moderator {
                user_id,
                name: component
                    .member
                    .as_ref()
                    .map(|m| m.display_name().to_string())
                    .unwrap_or_else(|| component.user.name.clone()),
            };

            ThxService::new(db, gateway(&ctx))
                .resolve_thx(guild_id.get(), message_id, moderator, decision)
                .await
                .map(|resolution| reply::thx_resolution_text(&resolution).to_string())
        }
        REVEAL_CODE_ID => reveal_code(db, voucher, &ctx, message_id, user_id).await,
        other => {
            tracing::warn!("Received unknown button {}", other);
            Ok("This button is no longer supported.".to_string())
        }
    };

    let text = result.unwrap_or_else(|e| {
        tracing::error!(
            "Button {} on message {} failed: {}",
            component.data.custom_id,
            message_id,
            e
        );
        reply::GENERIC_ERROR.to_string()
    });

    if let Err(e) = component
        .edit_response(&ctx.http, reply::edit_response(OutboundMessage::text(text)))
        .await
    {
        tracing::error!("Failed to answer button {}: {}", component.data.custom_id, e);
    }
}

async fn reveal_code(
    db: &DatabaseConnection,
    voucher: Arc<dyn VoucherClient>,
    ctx: &Context,
    message_id: u64,
    user_id: u64,
) -> Result<String, AppError> {
    let service = GiveawayService::new(db, gateway(ctx), voucher);

    if !service.has_won(message_id, user_id).await? {
        return Ok("Only the winner can reveal the code.".to_string());
    }

    Ok(match service.code_for(message_id).await? {
        Some(code) => format!("Your code: `{}`", code),
        None => "No code was recorded for this giveaway.".to_string(),
    })
}
