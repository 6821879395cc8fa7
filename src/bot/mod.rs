//! Discord bot integration.
//!
//! The bot owns three slash commands (`/pod`, `/alert`, `/info`), the button
//! and modal interactions on pod cards, and the background expiry sweep. All
//! state changes go through the service layer; handlers only translate
//! Discord events into service calls and render the results back.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel metadata
//! - `GUILD_MESSAGES` - Pod card messages
//! - `GUILD_MEMBERS` - Display name lookups (privileged intent, must be
//!   enabled in the Discord Developer Portal)

pub mod commands;
pub mod handler;
pub mod router;
pub mod start;
