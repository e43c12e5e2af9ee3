use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{Context, EventHandler, Guild, Interaction, Reaction, Ready},
    async_trait,
};

use crate::{
    gateway::{DiscordGateway, SerenityGateway},
    voucher::VoucherClient,
};

pub mod command;
pub mod component;
pub mod guild;
pub mod reaction;
pub mod ready;
pub mod reply;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub voucher: Arc<dyn VoucherClient>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, voucher: Arc<dyn VoucherClient>) -> Self {
        Self { db, voucher }
    }
}

/// Wraps the event's HTTP client as a gateway for the services.
pub(crate) fn gateway(ctx: &Context) -> Arc<dyn DiscordGateway> {
    Arc::new(SerenityGateway::new(ctx.http.clone()))
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild).await;
    }

    /// Called for slash commands and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                command::handle_command(&self.db, self.voucher.clone(), ctx, command).await;
            }
            Interaction::Component(component) => {
                component::handle_component(&self.db, self.voucher.clone(), ctx, component).await;
            }
            _ => {}
        }
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.db, ctx, add_reaction).await;
    }
}
