//! Plugin-side evaluation core.
//!
//! Resolves the player's entities out of a world snapshot, decides whether
//! the gated check-in action is currently permitted, and builds validated
//! action calls for the dispatch boundary. All derived state is recomputed
//! from scratch on every update; nothing here accumulates, so duplicate or
//! out-of-order snapshots and host messages converge on the latest input.
pub mod checkin;
pub mod commands;
pub mod config;
pub mod locator;
pub mod message;
pub mod plugin;

pub use checkin::{CheckInState, CheckInStatus, evaluate};
pub use commands::{CheckInError, CommandError};
pub use config::{OwnershipModel, PluginConfig};
pub use message::{HostMessage, MessageEnvelope};
pub use plugin::{PluginController, PluginError};
