//! Platform port - the operations the relay requests from the chat platform
//!
//! The domain layer defines what it needs; the connector (or the in-memory
//! implementation used for replay and tests) provides it. Every call is a
//! suspension point.

use std::path::Path;

use async_trait::async_trait;

use crate::entities::{Channel, Guild, Member, Role};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, DomainError>;

/// Request payload for role creation
#[derive(Debug, Clone, Copy)]
pub struct CreateRole<'a> {
    pub name: &'a str,
    pub hoist: bool,
    pub mentionable: bool,
    /// Audit-log justification recorded by the platform
    pub reason: &'a str,
}

/// The platform API surface the relay consumes
#[async_trait]
pub trait Platform: Send + Sync {
    /// List connected guilds
    async fn guilds(&self) -> PlatformResult<Vec<Guild>>;

    /// List all members of a guild
    async fn guild_members(&self, guild_id: Snowflake) -> PlatformResult<Vec<Member>>;

    /// List all roles of a guild, in platform iteration order
    async fn guild_roles(&self, guild_id: Snowflake) -> PlatformResult<Vec<Role>>;

    /// List all text channels of a guild, in platform iteration order
    async fn text_channels(&self, guild_id: Snowflake) -> PlatformResult<Vec<Channel>>;

    /// Create a role in a guild
    async fn create_role(
        &self,
        guild_id: Snowflake,
        request: CreateRole<'_>,
    ) -> PlatformResult<Role>;

    /// Create a text channel in a guild with an audit reason
    async fn create_text_channel(
        &self,
        guild_id: Snowflake,
        name: &str,
        reason: &str,
    ) -> PlatformResult<Channel>;

    /// Grant a role to a guild member
    async fn add_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
    ) -> PlatformResult<()>;

    /// Send a message to a channel, optionally with the speech-synthesis flag
    async fn send_message(&self, channel_id: Snowflake, text: &str, tts: bool)
        -> PlatformResult<()>;

    /// Send a direct message to a user
    async fn send_direct_message(
        &self,
        user_id: Snowflake,
        text: &str,
        tts: bool,
    ) -> PlatformResult<()>;

    /// Send a file attachment to a channel
    async fn send_file(&self, channel_id: Snowflake, path: &Path) -> PlatformResult<()>;
}
