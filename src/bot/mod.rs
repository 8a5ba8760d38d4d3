//! Discord bot integration.
//!
//! Wires the gateway client to the giveaway service: the event handler parses
//! the prefix command surface (`!gstart <duration> <winners> <prize...>`),
//! gates it on the configured staff roles, and forwards to the service. The
//! bot runs on the main task; the per-giveaway conclusion timers it triggers
//! run on their own spawned tasks.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - channel lookups
//! - `GUILD_MESSAGES` + `MESSAGE_CONTENT` - prefix command parsing
//! - `GUILD_MESSAGE_REACTIONS` - entry reactions on announcements

pub mod handler;
pub mod start;
