//! `DiscordGateway` implementation over serenity's HTTP client.

use std::sync::Arc;

use serenity::{
    all::{
        ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
        CreateMessage, EditMessage, GuildId, Member, MessageId, Permissions, ReactionType, RoleId,
        UserId,
    },
    async_trait,
    http::{Http, HttpError},
};

use crate::{
    error::AppError,
    gateway::{ButtonKind, DiscordGateway, MemberInfo, OutboundEmbed, OutboundMessage},
};

/// Page size used when listing guild members.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Discord gateway backed by the bot's shared `Http` client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    /// Creates a gateway sharing the bot client's HTTP connection.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client from the bot client
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

pub(crate) fn build_embed(embed: OutboundEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(embed.title)
        .description(embed.description)
        .color(embed.color);

    for field in embed.fields {
        builder = builder.field(field.name, field.value, field.inline);
    }

    if let Some(footer) = embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }

    builder
}

fn build_components(message: &OutboundMessage) -> Vec<CreateActionRow> {
    if message.buttons.is_empty() {
        return Vec::new();
    }

    let buttons = message
        .buttons
        .iter()
        .map(|button| {
            let style = match button.kind {
                ButtonKind::Primary => ButtonStyle::Primary,
                ButtonKind::Success => ButtonStyle::Success,
                ButtonKind::Danger => ButtonStyle::Danger,
            };
            CreateButton::new(button.custom_id.clone())
                .label(button.label.clone())
                .style(style)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

fn build_create_message(message: OutboundMessage) -> CreateMessage {
    let components = build_components(&message);
    let mut builder = CreateMessage::new();

    if let Some(content) = message.content {
        builder = builder.content(content);
    }
    if let Some(embed) = message.embed {
        builder = builder.embed(build_embed(embed));
    }
    if !components.is_empty() {
        builder = builder.components(components);
    }

    builder
}

impl From<&Member> for MemberInfo {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            display_name: member.display_name().to_string(),
            is_bot: member.user.bot,
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
        }
    }
}

/// Whether an error is Discord answering 404 for the requested resource.
fn is_not_found(error: &serenity::Error) -> bool {
    matches!(
        error,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, AppError> {
        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, build_create_message(message))
            .await?;

        Ok(sent.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: OutboundMessage,
    ) -> Result<(), AppError> {
        let components = build_components(&message);
        let mut builder = EditMessage::new().components(components);

        if let Some(content) = message.content {
            builder = builder.content(content);
        }
        if let Some(embed) = message.embed {
            builder = builder.embed(build_embed(embed));
        }

        ChannelId::new(channel_id)
            .edit_message(&self.http, MessageId::new(message_id), builder)
            .await?;

        Ok(())
    }

    async fn send_direct_message(
        &self,
        user_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, AppError> {
        let sent = UserId::new(user_id)
            .direct_message(&self.http, build_create_message(message))
            .await?;

        Ok(sent.id.get())
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .create_reaction(
                &self.http,
                MessageId::new(message_id),
                ReactionType::Unicode(emoji.to_string()),
            )
            .await?;

        Ok(())
    }

    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
        emoji: &str,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_reaction(
                &self.http,
                MessageId::new(message_id),
                Some(UserId::new(user_id)),
                ReactionType::Unicode(emoji.to_string()),
            )
            .await?;

        Ok(())
    }

    async fn member(&self, guild_id: u64, user_id: u64) -> Result<Option<MemberInfo>, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(MemberInfo::from(&member))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn guild_members(&self, guild_id: u64) -> Result<Vec<MemberInfo>, AppError> {
        // Requires the GUILD_MEMBERS privileged intent
        let mut members = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(GuildId::new(guild_id), Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let page_len = page.len() as u64;

            after = page.last().map(|member| member.user.id.get());
            members.extend(page.iter().map(MemberInfo::from));

            if page_len < MEMBER_PAGE_SIZE {
                break;
            }
        }

        Ok(members)
    }

    async fn role_exists(&self, guild_id: u64, role_id: u64) -> Result<bool, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        Ok(roles.iter().any(|role| role.id.get() == role_id))
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Reached the helper threshold"),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("No longer eligible for the helper role"),
            )
            .await?;

        Ok(())
    }

    async fn has_permission(
        &self,
        guild_id: u64,
        user_id: u64,
        permission: Permissions,
    ) -> Result<bool, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;
        if guild.owner_id.get() == user_id {
            return Ok(true);
        }

        let member = match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => member,
            Err(e) if is_not_found(&e) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        // The @everyone role shares its ID with the guild
        let mut permissions = guild
            .roles
            .get(&RoleId::new(guild_id))
            .map(|role| role.permissions)
            .unwrap_or_else(Permissions::empty);

        for role_id in &member.roles {
            if let Some(role) = guild.roles.get(role_id) {
                permissions |= role.permissions;
            }
        }

        Ok(permissions.administrator() || permissions.contains(permission))
    }
}
