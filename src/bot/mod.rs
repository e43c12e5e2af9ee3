//! Discord bot: event dispatch, slash commands, buttons and reactions.
//!
//! The handler turns Discord events into service calls and renders their outcomes back
//! to the user. It holds no state of its own; every event builds its services from the
//! shared database connection and the event's HTTP client.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to create settings and sync helper roles
//! - `GUILD_MEMBERS` - Member listing for the guild-wide helper recompute (privileged)
//! - `GUILD_MESSAGE_REACTIONS` - ✅/❌ reactions on thx and nomination messages
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
