//! Slash command dispatch.
//!
//! Every command is deferred as an ephemeral response first, since the thx and draw
//! paths make several Discord calls, and the outcome replaces the "thinking" message.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    ResolvedOption, ResolvedValue, User,
};

use crate::{
    bot::{
        commands,
        handler::{gateway, reply},
    },
    error::{settings::SettingsError, AppError},
    gateway::{DiscordGateway, MemberInfo, OutboundMessage},
    model::{
        blacklist::BlacklistKind,
        server_config::{parse_level_thresholds, UpdateServerConfigParam},
    },
    service::{
        blacklist::BlacklistService,
        builder,
        giveaway::GiveawayService,
        helper::HelperService,
        server_config::ServerConfigService,
        status::StatusService,
        thx::{NominateParam, RecordThxParam, ThxService},
    },
    voucher::VoucherClient,
};

/// Context shared by every command handler.
struct Invocation<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
    guild_id: u64,
    channel_id: u64,
    invoker: MemberInfo,
    options: Vec<ResolvedOption<'a>>,
}

/// Handles a slash command interaction.
///
/// # Arguments
/// - `db` - Database connection
/// - `voucher` - Voucher client for `/draw`
/// - `ctx` - Discord context providing the HTTP client
/// - `command` - The command interaction
pub async fn handle_command(
    db: &DatabaseConnection,
    voucher: Arc<dyn VoucherClient>,
    ctx: Context,
    command: CommandInteraction,
) {
    let (Some(guild_id), Some(member)) = (command.guild_id, command.member.as_deref()) else {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(reply::GUILD_ONLY)
                .ephemeral(true),
        );
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!("Failed to respond to command {}: {}", command.data.name, e);
        }
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer command {}: {}", command.data.name, e);
        return;
    }

    let invocation = Invocation {
        db,
        gateway: gateway(&ctx),
        guild_id: guild_id.get(),
        channel_id: command.channel_id.get(),
        invoker: MemberInfo::from(member),
        options: command.data.options(),
    };

    tracing::debug!(
        "Command /{} from {} in guild {}",
        command.data.name,
        invocation.invoker.user_id,
        invocation.guild_id
    );

    let result = match command.data.name.as_str() {
        commands::THX => thx(&invocation).await,
        commands::CANDIDATE => candidate(&invocation).await,
        commands::GIVEAWAY => show_giveaway(&invocation, voucher).await,
        commands::DRAW => draw(&invocation, voucher).await,
        commands::BLACKLIST => blacklist(&invocation, BlacklistKind::Thx, true).await,
        commands::UNBLACKLIST => blacklist(&invocation, BlacklistKind::Thx, false).await,
        commands::HELPER_BLACKLIST => blacklist(&invocation, BlacklistKind::Helper, true).await,
        commands::HELPER_UNBLACKLIST => {
            blacklist(&invocation, BlacklistKind::Helper, false).await
        }
        commands::SETTINGS => settings(&invocation).await,
        commands::RECOMPUTE_HELPERS => recompute_helpers(&invocation).await,
        commands::STATUS_ADD => status_add(&invocation).await,
        commands::STATUS_REMOVE => status_remove(&invocation).await,
        commands::STATUS_LIST => status_list(&invocation).await,
        commands::STATUS_POST => status_post(&invocation).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(OutboundMessage::text("Unknown command."))
        }
    };

    let message = result.unwrap_or_else(|e| match e {
        // Refused input, shown to the administrator as is
        AppError::SettingsErr(e) => OutboundMessage::text(e.to_string()),
        AppError::StatusTemplateErr(e) => OutboundMessage::text(e.to_string()),
        e => {
            tracing::error!("Command /{} failed: {}", command.data.name, e);
            OutboundMessage::text(reply::GENERIC_ERROR)
        }
    });

    if let Err(e) = command
        .edit_response(&ctx.http, reply::edit_response(message))
        .await
    {
        tracing::error!("Failed to answer command {}: {}", command.data.name, e);
    }
}

fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::User(user, _) if option.name == name => Some(user),
        _ => None,
    })
}

fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

fn role_option(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Role(role) if option.name == name => Some(role.id.get()),
        _ => None,
    })
}

fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Channel(channel) if option.name == name => Some(channel.id.get()),
        _ => None,
    })
}

fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

/// Looks up the member behind a required user option.
async fn member_option(
    invocation: &Invocation<'_>,
    name: &str,
) -> Result<Option<MemberInfo>, AppError> {
    let Some(user) = user_option(&invocation.options, name) else {
        return Ok(None);
    };

    invocation
        .gateway
        .member(invocation.guild_id, user.id.get())
        .await
}

async fn thx(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let Some(target) = member_option(invocation, commands::OPT_USER).await? else {
        return Ok(OutboundMessage::text(reply::NOT_A_MEMBER));
    };

    let outcome = ThxService::new(invocation.db, invocation.gateway.clone())
        .record_thx(RecordThxParam {
            guild_id: invocation.guild_id,
            channel_id: invocation.channel_id,
            actor: invocation.invoker.clone(),
            target,
            reason: string_option(&invocation.options, commands::OPT_REASON).map(String::from),
        })
        .await?;

    Ok(OutboundMessage::text(reply::thx_outcome_text(&outcome)))
}

async fn candidate(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let Some(approver) = member_option(invocation, commands::OPT_APPROVER).await? else {
        return Ok(OutboundMessage::text(reply::NOT_A_MEMBER));
    };

    let outcome = ThxService::new(invocation.db, invocation.gateway.clone())
        .nominate(NominateParam {
            guild_id: invocation.guild_id,
            channel_id: invocation.channel_id,
            candidate: invocation.invoker.clone(),
            approver,
        })
        .await?;

    Ok(OutboundMessage::text(reply::nomination_outcome_text(
        &outcome,
    )))
}

async fn show_giveaway(
    invocation: &Invocation<'_>,
    voucher: Arc<dyn VoucherClient>,
) -> Result<OutboundMessage, AppError> {
    let (giveaway, participants) =
        GiveawayService::new(invocation.db, invocation.gateway.clone(), voucher)
            .current_participants(invocation.guild_id)
            .await?;

    Ok(builder::roster_message(giveaway.as_ref(), &participants))
}

async fn draw(
    invocation: &Invocation<'_>,
    voucher: Arc<dyn VoucherClient>,
) -> Result<OutboundMessage, AppError> {
    let service = GiveawayService::new(invocation.db, invocation.gateway.clone(), voucher);

    let outcome = service.close(invocation.guild_id).await?;
    service.ensure_open(invocation.guild_id).await?;

    tracing::info!(
        "{} drew the giveaway of guild {}: {:?}",
        invocation.invoker.user_id,
        invocation.guild_id,
        outcome
    );

    Ok(OutboundMessage::text(reply::close_outcome_text(&outcome)))
}

async fn blacklist(
    invocation: &Invocation<'_>,
    kind: BlacklistKind,
    adding: bool,
) -> Result<OutboundMessage, AppError> {
    let Some(user) = user_option(&invocation.options, commands::OPT_USER) else {
        return Ok(OutboundMessage::text(reply::NOT_A_MEMBER));
    };
    let user_id = user.id.get();

    let service = BlacklistService::new(invocation.db, invocation.gateway.clone());
    let changed = if adding {
        service
            .add(kind, invocation.guild_id, user_id, invocation.invoker.user_id)
            .await?
    } else {
        service.remove(kind, invocation.guild_id, user_id).await?
    };

    let list = match kind {
        BlacklistKind::Thx => "thx blacklist",
        BlacklistKind::Helper => "helper blacklist",
    };

    Ok(OutboundMessage::text(reply::blacklist_text(
        list, user_id, adding, changed,
    )))
}

/// Converts an integer option into a count, refusing negative values.
fn count_option(
    options: &[ResolvedOption<'_>],
    name: &'static str,
) -> Result<Option<u32>, SettingsError> {
    let Some(value) = integer_option(options, name) else {
        return Ok(None);
    };

    u32::try_from(value)
        .map(Some)
        .map_err(|_| SettingsError::OutOfRange {
            name,
            value,
            min: 0,
            max: u32::MAX.into(),
        })
}

async fn settings(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let options = &invocation.options;
    let level_thresholds = string_option(options, commands::OPT_LEVEL_THRESHOLDS)
        .map(parse_level_thresholds)
        .transpose()?;

    let param = UpdateServerConfigParam {
        admin_role_id: role_option(options, commands::OPT_ADMIN_ROLE),
        giveaway_channel_id: channel_option(options, commands::OPT_GIVEAWAY_CHANNEL),
        thx_info_channel_id: channel_option(options, commands::OPT_THX_INFO_CHANNEL),
        unconditional_channel_id: channel_option(options, commands::OPT_UNCONDITIONAL_CHANNEL),
        conditional_channel_id: channel_option(options, commands::OPT_CONDITIONAL_CHANNEL),
        helper_role_id: role_option(options, commands::OPT_HELPER_ROLE),
        helper_threshold: count_option(options, commands::OPT_HELPER_THRESHOLD)?,
        unconditional_winner_count: count_option(options, commands::OPT_UNCONDITIONAL_WINNERS)?,
        conditional_winner_count: count_option(options, commands::OPT_CONDITIONAL_WINNERS)?,
        level_thresholds,
    };

    let service = ServerConfigService::new(invocation.db);
    if param.is_empty() {
        let config = service.get_or_create(invocation.guild_id).await?;
        return Ok(reply::settings_message(&config));
    }

    let affects_helpers = param.affects_helpers();
    let config = service.update(invocation.guild_id, param).await?;

    if affects_helpers {
        if let Err(e) = HelperService::new(invocation.db, invocation.gateway.clone())
            .recompute_all_helpers(invocation.guild_id)
            .await
        {
            tracing::error!(
                "Failed to sync helper roles in guild {} after a settings change: {}",
                invocation.guild_id,
                e
            );
        }
    }

    Ok(reply::settings_message(&config))
}

async fn recompute_helpers(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let summary = HelperService::new(invocation.db, invocation.gateway.clone())
        .recompute_all_helpers(invocation.guild_id)
        .await?;

    Ok(OutboundMessage::text(reply::helper_summary_text(&summary)))
}

async fn status_add(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let text = string_option(&invocation.options, commands::OPT_TEXT).unwrap_or_default();

    let template = StatusService::new(invocation.db, invocation.gateway.clone())
        .add_template(invocation.guild_id, text)
        .await?;

    Ok(OutboundMessage::text(format!(
        "Added status template #{}.",
        template.id
    )))
}

async fn status_remove(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let id = integer_option(&invocation.options, commands::OPT_ID)
        .and_then(|id| i32::try_from(id).ok());
    let Some(id) = id else {
        return Ok(OutboundMessage::text(reply::status_removed_text(None)));
    };

    let removed = StatusService::new(invocation.db, invocation.gateway.clone())
        .remove_template(invocation.guild_id, id)
        .await?;

    Ok(OutboundMessage::text(reply::status_removed_text(
        removed.then_some(id),
    )))
}

async fn status_list(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let templates = StatusService::new(invocation.db, invocation.gateway.clone())
        .list_templates(invocation.guild_id)
        .await?;

    Ok(reply::status_list_message(&templates))
}

async fn status_post(invocation: &Invocation<'_>) -> Result<OutboundMessage, AppError> {
    let outcome = StatusService::new(invocation.db, invocation.gateway.clone())
        .announce(invocation.guild_id)
        .await?;

    Ok(OutboundMessage::text(reply::status_outcome_text(&outcome)))
}
