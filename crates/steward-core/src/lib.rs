//! # steward-core
//!
//! Domain layer containing platform entity snapshots, the structured event
//! model, and the `Platform` port trait. This crate has zero dependencies on
//! infrastructure (runtime, filesystem, network).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, ChannelKind, Guild, Member, Presence, Role, UserStatus, VoiceState, EVERYONE_ROLE,
};
pub use error::DomainError;
pub use events::{CommandInvocation, GuildSnapshot, PlatformEvent};
pub use traits::{CreateRole, Platform, PlatformResult};
pub use value_objects::{Snowflake, SnowflakeParseError};
