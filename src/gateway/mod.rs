//! Outbound Discord operations used by the services.
//!
//! Services never talk to serenity directly. They describe messages with the plain
//! `OutboundMessage` types below and send them through a `DiscordGateway`, which keeps the
//! giveaway and thx workflows testable without a live Discord connection.
//!
//! `SerenityGateway` is the production implementation over serenity's `Http` client.

pub mod http;

use serenity::{all::Permissions, async_trait};

use crate::error::AppError;

pub use self::http::SerenityGateway;

/// Visual style of a message button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Success,
    Danger,
}

/// A button attached below a message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundButton {
    /// Identifier routed back through component interactions.
    pub custom_id: String,
    pub label: String,
    pub kind: ButtonKind,
}

/// A single embed field.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich embed content of a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutboundEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<OutboundField>,
    pub footer: Option<String>,
}

impl OutboundEmbed {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(OutboundField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// A message to post, edit or send privately.
///
/// Editing with an empty `buttons` list removes any existing buttons from the message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutboundMessage {
    pub content: Option<String>,
    pub embed: Option<OutboundEmbed>,
    pub buttons: Vec<OutboundButton>,
}

impl OutboundMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: OutboundEmbed) -> Self {
        Self {
            embed: Some(embed),
            ..Default::default()
        }
    }

    pub fn button(
        mut self,
        custom_id: impl Into<String>,
        label: impl Into<String>,
        kind: ButtonKind,
    ) -> Self {
        self.buttons.push(OutboundButton {
            custom_id: custom_id.into(),
            label: label.into(),
            kind,
        });
        self
    }
}

/// The parts of a guild member the workflows care about.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub user_id: u64,
    /// Guild nickname, falling back to the global display name and then the username.
    pub display_name: String,
    pub is_bot: bool,
    pub role_ids: Vec<u64>,
}

impl MemberInfo {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

/// Outbound Discord operations.
///
/// Every call is fire-and-report: failures are returned to the caller, which decides
/// whether to log and continue. Implementations never retry.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Posts a message to a channel and returns its message ID.
    async fn send_message(&self, channel_id: u64, message: OutboundMessage)
        -> Result<u64, AppError>;

    /// Replaces the content, embed and buttons of an existing message.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: OutboundMessage,
    ) -> Result<(), AppError>;

    /// Sends a direct message to a user and returns its message ID.
    async fn send_direct_message(
        &self,
        user_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, AppError>;

    /// Adds the bot's own unicode reaction to a message.
    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), AppError>;

    /// Removes a user's unicode reaction from a message.
    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
        emoji: &str,
    ) -> Result<(), AppError>;

    /// Fetches a guild member, `None` when the user is not in the guild.
    async fn member(&self, guild_id: u64, user_id: u64) -> Result<Option<MemberInfo>, AppError>;

    /// Fetches every member of a guild.
    async fn guild_members(&self, guild_id: u64) -> Result<Vec<MemberInfo>, AppError>;

    async fn role_exists(&self, guild_id: u64, role_id: u64) -> Result<bool, AppError>;

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    /// Checks whether a member holds a guild-level permission.
    ///
    /// Guild owners and members with `ADMINISTRATOR` hold every permission.
    async fn has_permission(
        &self,
        guild_id: u64,
        user_id: u64,
        permission: Permissions,
    ) -> Result<bool, AppError>;
}
