//! Slash command definitions.
//!
//! Administrative commands carry `MANAGE_GUILD` as their default member permission, so
//! Discord hides them from regular members unless a server overrides it.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use crate::{
    model::server_config::{MAX_HELPER_THRESHOLD, MAX_WINNER_COUNT},
    service::status::MAX_TEMPLATE_LEN,
};

pub const THX: &str = "thx";
pub const CANDIDATE: &str = "candidate";
pub const GIVEAWAY: &str = "giveaway";
pub const DRAW: &str = "draw";
pub const BLACKLIST: &str = "blacklist";
pub const UNBLACKLIST: &str = "unblacklist";
pub const HELPER_BLACKLIST: &str = "helper-blacklist";
pub const HELPER_UNBLACKLIST: &str = "helper-unblacklist";
pub const SETTINGS: &str = "settings";
pub const RECOMPUTE_HELPERS: &str = "recompute-helpers";
pub const STATUS_ADD: &str = "status-add";
pub const STATUS_REMOVE: &str = "status-remove";
pub const STATUS_LIST: &str = "status-list";
pub const STATUS_POST: &str = "status-post";

pub const OPT_USER: &str = "user";
pub const OPT_REASON: &str = "reason";
pub const OPT_APPROVER: &str = "approver";
pub const OPT_ADMIN_ROLE: &str = "admin-role";
pub const OPT_GIVEAWAY_CHANNEL: &str = "giveaway-channel";
pub const OPT_THX_INFO_CHANNEL: &str = "thx-info-channel";
pub const OPT_HELPER_ROLE: &str = "helper-role";
pub const OPT_HELPER_THRESHOLD: &str = "helper-threshold";
pub const OPT_UNCONDITIONAL_CHANNEL: &str = "unconditional-channel";
pub const OPT_CONDITIONAL_CHANNEL: &str = "conditional-channel";
pub const OPT_UNCONDITIONAL_WINNERS: &str = "unconditional-winners";
pub const OPT_CONDITIONAL_WINNERS: &str = "conditional-winners";
pub const OPT_LEVEL_THRESHOLDS: &str = "level-thresholds";
pub const OPT_TEXT: &str = "text";
pub const OPT_ID: &str = "id";

/// All commands registered globally on ready.
pub fn all() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(THX)
            .description("Thank a member for their help")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, OPT_USER, "Who helped you")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, OPT_REASON, "What they did")
                    .max_length(500),
            ),
        CreateCommand::new(CANDIDATE)
            .description("Ask a member to thank you")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    OPT_APPROVER,
                    "The member you helped",
                )
                .required(true),
            ),
        CreateCommand::new(GIVEAWAY).description("Show the current giveaway"),
        admin(DRAW, "Close the current giveaway now and open a new one"),
        admin(BLACKLIST, "Stop a member from receiving thx").add_option(user_option()),
        admin(UNBLACKLIST, "Allow a member to receive thx again").add_option(user_option()),
        admin(HELPER_BLACKLIST, "Stop a member from becoming a helper").add_option(user_option()),
        admin(HELPER_UNBLACKLIST, "Allow a member to become a helper again")
            .add_option(user_option()),
        admin(SETTINGS, "Show or change the bot settings")
            .add_option(CreateCommandOption::new(
                CommandOptionType::Role,
                OPT_ADMIN_ROLE,
                "Role allowed to moderate thx",
            ))
            .add_option(CreateCommandOption::new(
                CommandOptionType::Channel,
                OPT_GIVEAWAY_CHANNEL,
                "Channel for giveaway announcements",
            ))
            .add_option(CreateCommandOption::new(
                CommandOptionType::Channel,
                OPT_THX_INFO_CHANNEL,
                "Channel mirroring thx for moderators",
            ))
            .add_option(CreateCommandOption::new(
                CommandOptionType::Role,
                OPT_HELPER_ROLE,
                "Role granted to helpers",
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    OPT_HELPER_THRESHOLD,
                    "Accepted thx needed for the helper role",
                )
                .min_int_value(0)
                .max_int_value(MAX_HELPER_THRESHOLD.into()),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Channel,
                OPT_UNCONDITIONAL_CHANNEL,
                "Channel for unconditional giveaways",
            ))
            .add_option(CreateCommandOption::new(
                CommandOptionType::Channel,
                OPT_CONDITIONAL_CHANNEL,
                "Channel for conditional giveaways",
            ))
            .add_option(winner_count_option(
                OPT_UNCONDITIONAL_WINNERS,
                "Winners per unconditional giveaway",
            ))
            .add_option(winner_count_option(
                OPT_CONDITIONAL_WINNERS,
                "Winners per conditional giveaway",
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    OPT_LEVEL_THRESHOLDS,
                    "Accepted thx per level, e.g. 10,25,50, or none to clear",
                )
                .max_length(200),
            ),
        admin(RECOMPUTE_HELPERS, "Re-check the helper role of every member"),
        admin(STATUS_ADD, "Add a status announcement template").add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                OPT_TEXT,
                "Text with optional {entries}, {participants}, {pending} and {since}",
            )
            .required(true)
            .max_length(MAX_TEMPLATE_LEN as u16),
        ),
        admin(STATUS_REMOVE, "Remove a status announcement template").add_option(
            CreateCommandOption::new(CommandOptionType::Integer, OPT_ID, "Template id")
                .required(true)
                .min_int_value(1)
                .max_int_value(i32::MAX as u64),
        ),
        admin(STATUS_LIST, "List the status announcement templates"),
        admin(STATUS_POST, "Post the next status announcement now"),
    ]
}

fn admin(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .default_member_permissions(Permissions::MANAGE_GUILD)
}

fn winner_count_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description)
        .min_int_value(1)
        .max_int_value(MAX_WINNER_COUNT.into())
}

fn user_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, OPT_USER, "The member").required(true)
}

