//! In-memory platform
//!
//! Maintains per-guild role/channel/member state and records every outbound
//! message, direct message, and file send. State can be seeded directly or
//! kept in sync from a replayed event stream via [`MemoryPlatform::observe`].

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;

use steward_core::{
    Channel, CreateRole, DomainError, Guild, Member, Platform, PlatformEvent, PlatformResult,
    Role, Snowflake,
};

/// A message sent to a guild channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: Snowflake,
    pub text: String,
    pub tts: bool,
}

/// A direct message sent to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    pub user_id: Snowflake,
    pub text: String,
    pub tts: bool,
}

/// A file sent to a guild channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentFile {
    pub channel_id: Snowflake,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
struct GuildState {
    guild: Guild,
    roles: Vec<Role>,
    channels: Vec<Channel>,
    members: Vec<Member>,
}

impl GuildState {
    fn new(guild: Guild) -> Self {
        Self {
            guild,
            roles: Vec::new(),
            channels: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// DashMap-backed in-memory platform
#[derive(Default)]
pub struct MemoryPlatform {
    guilds: DashMap<Snowflake, GuildState>,
    messages: Mutex<Vec<SentMessage>>,
    directs: Mutex<Vec<DirectMessage>>,
    files: Mutex<Vec<SentFile>>,
    next_id: AtomicU64,
}

impl MemoryPlatform {
    /// Create an empty platform
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1_000_000),
            ..Self::default()
        }
    }

    fn allocate_id(&self) -> Snowflake {
        Snowflake::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a guild (no-op when already present)
    pub fn seed_guild(&self, guild: Guild) {
        self.guilds
            .entry(guild.id)
            .or_insert_with(|| GuildState::new(guild));
    }

    /// Insert or replace a member snapshot
    pub fn seed_member(&self, member: Member) {
        self.seed_guild(member.guild.clone());
        let mut state = self
            .guilds
            .get_mut(&member.guild.id)
            .expect("guild seeded above");
        match state
            .members
            .iter_mut()
            .find(|m| m.user_id == member.user_id)
        {
            Some(existing) => *existing = member,
            None => state.members.push(member),
        }
    }

    /// Insert a role into a guild
    pub fn seed_role(&self, guild: &Guild, role: Role) {
        self.seed_guild(guild.clone());
        let mut state = self.guilds.get_mut(&guild.id).expect("guild seeded above");
        state.roles.push(role);
    }

    /// Insert a channel into a guild
    pub fn seed_channel(&self, channel: Channel) {
        self.seed_guild(channel.guild.clone());
        let mut state = self
            .guilds
            .get_mut(&channel.guild.id)
            .expect("guild seeded above");
        state.channels.push(channel);
    }

    /// Keep guild state in sync with a replayed event stream.
    ///
    /// Applied before the event is dispatched so handlers observe the state
    /// the live platform would expose at that moment.
    pub fn observe(&self, event: &PlatformEvent) {
        match event {
            PlatformEvent::Ready { guilds } => {
                for snapshot in guilds {
                    self.seed_guild(snapshot.guild.clone());
                    for member in &snapshot.members {
                        self.seed_member(member.clone());
                    }
                }
            }
            PlatformEvent::MemberUpdate { after, .. } => self.seed_member(after.clone()),
            PlatformEvent::MemberJoin { member }
            | PlatformEvent::VoiceStateUpdate { member, .. } => self.seed_member(member.clone()),
            PlatformEvent::MemberRemove { member } => {
                if let Some(mut state) = self.guilds.get_mut(&member.guild.id) {
                    state.members.retain(|m| m.user_id != member.user_id);
                }
            }
            PlatformEvent::MemberBan { guild, member } => {
                if let Some(mut state) = self.guilds.get_mut(&guild.id) {
                    state.members.retain(|m| m.user_id != member.user_id);
                }
            }
            PlatformEvent::ChannelCreate { channel } => {
                self.seed_guild(channel.guild.clone());
                let mut state = self
                    .guilds
                    .get_mut(&channel.guild.id)
                    .expect("guild seeded above");
                if !state.channels.iter().any(|c| c.id == channel.id) {
                    state.channels.push(channel.clone());
                }
            }
            PlatformEvent::ChannelDelete { channel } => {
                if let Some(mut state) = self.guilds.get_mut(&channel.guild.id) {
                    state.channels.retain(|c| c.id != channel.id);
                }
            }
            PlatformEvent::Command { invocation } => self.seed_guild(invocation.guild.clone()),
        }
    }

    /// All channel messages sent so far
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.messages.lock().clone()
    }

    /// All direct messages sent so far
    pub fn direct_messages(&self) -> Vec<DirectMessage> {
        self.directs.lock().clone()
    }

    /// All files sent so far
    pub fn sent_files(&self) -> Vec<SentFile> {
        self.files.lock().clone()
    }

    /// Roles currently held by a member
    pub fn member_roles(&self, guild_id: Snowflake, user_id: Snowflake) -> Vec<Role> {
        self.guilds
            .get(&guild_id)
            .and_then(|state| {
                state
                    .members
                    .iter()
                    .find(|m| m.user_id == user_id)
                    .map(|m| m.roles.clone())
            })
            .unwrap_or_default()
    }

    /// Number of roles with the given name in a guild
    pub fn role_count(&self, guild_id: Snowflake, name: &str) -> usize {
        self.guilds
            .get(&guild_id)
            .map(|state| state.roles.iter().filter(|r| r.name == name).count())
            .unwrap_or(0)
    }

    /// Number of channels with the given name in a guild
    pub fn channel_count(&self, guild_id: Snowflake, name: &str) -> usize {
        self.guilds
            .get(&guild_id)
            .map(|state| state.channels.iter().filter(|c| c.name == name).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Platform for MemoryPlatform {
    async fn guilds(&self) -> PlatformResult<Vec<Guild>> {
        Ok(self
            .guilds
            .iter()
            .map(|entry| entry.guild.clone())
            .collect())
    }

    async fn guild_members(&self, guild_id: Snowflake) -> PlatformResult<Vec<Member>> {
        self.guilds
            .get(&guild_id)
            .map(|state| state.members.clone())
            .ok_or(DomainError::GuildNotFound(guild_id))
    }

    async fn guild_roles(&self, guild_id: Snowflake) -> PlatformResult<Vec<Role>> {
        self.guilds
            .get(&guild_id)
            .map(|state| state.roles.clone())
            .ok_or(DomainError::GuildNotFound(guild_id))
    }

    async fn text_channels(&self, guild_id: Snowflake) -> PlatformResult<Vec<Channel>> {
        self.guilds
            .get(&guild_id)
            .map(|state| {
                state
                    .channels
                    .iter()
                    .filter(|c| c.is_text())
                    .cloned()
                    .collect()
            })
            .ok_or(DomainError::GuildNotFound(guild_id))
    }

    async fn create_role(
        &self,
        guild_id: Snowflake,
        request: CreateRole<'_>,
    ) -> PlatformResult<Role> {
        let mut state = self
            .guilds
            .get_mut(&guild_id)
            .ok_or(DomainError::GuildNotFound(guild_id))?;
        let role = Role {
            id: self.allocate_id(),
            name: request.name.to_string(),
            hoist: request.hoist,
            mentionable: request.mentionable,
        };
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn create_text_channel(
        &self,
        guild_id: Snowflake,
        name: &str,
        _reason: &str,
    ) -> PlatformResult<Channel> {
        let mut state = self
            .guilds
            .get_mut(&guild_id)
            .ok_or(DomainError::GuildNotFound(guild_id))?;
        let channel = Channel::text(self.allocate_id(), state.guild.clone(), name);
        state.channels.push(channel.clone());
        Ok(channel)
    }

    async fn add_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
    ) -> PlatformResult<()> {
        let mut state = self
            .guilds
            .get_mut(&guild_id)
            .ok_or(DomainError::GuildNotFound(guild_id))?;
        let role = state
            .roles
            .iter()
            .find(|r| r.id == role_id)
            .cloned()
            .ok_or(DomainError::RoleNotFound(role_id))?;
        let member = state
            .members
            .iter_mut()
            .find(|m| m.user_id == user_id)
            .ok_or(DomainError::MemberNotFound { guild_id, user_id })?;
        if !member.has_role(role_id) {
            member.roles.push(role);
        }
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: Snowflake,
        text: &str,
        tts: bool,
    ) -> PlatformResult<()> {
        self.messages.lock().push(SentMessage {
            channel_id,
            text: text.to_string(),
            tts,
        });
        Ok(())
    }

    async fn send_direct_message(
        &self,
        user_id: Snowflake,
        text: &str,
        tts: bool,
    ) -> PlatformResult<()> {
        self.directs.lock().push(DirectMessage {
            user_id,
            text: text.to_string(),
            tts,
        });
        Ok(())
    }

    async fn send_file(&self, channel_id: Snowflake, path: &Path) -> PlatformResult<()> {
        self.files.lock().push(SentFile {
            channel_id,
            path: path.to_path_buf(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild() -> Guild {
        Guild::new(Snowflake::new(100), "UTGOP")
    }

    #[tokio::test]
    async fn test_create_role_then_add_to_member() {
        let platform = MemoryPlatform::new();
        platform.seed_member(Member::new(Snowflake::new(1), "Ann", guild()));

        let role = platform
            .create_role(
                guild().id,
                CreateRole {
                    name: "Plebs",
                    hoist: true,
                    mentionable: true,
                    reason: "test",
                },
            )
            .await
            .unwrap();
        platform
            .add_role(guild().id, Snowflake::new(1), role.id)
            .await
            .unwrap();

        let roles = platform.member_roles(guild().id, Snowflake::new(1));
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name, "Plebs");
    }

    #[tokio::test]
    async fn test_add_role_is_idempotent_per_member() {
        let platform = MemoryPlatform::new();
        platform.seed_member(Member::new(Snowflake::new(1), "Ann", guild()));
        let role = platform
            .create_role(
                guild().id,
                CreateRole {
                    name: "Plebs",
                    hoist: false,
                    mentionable: false,
                    reason: "test",
                },
            )
            .await
            .unwrap();

        platform
            .add_role(guild().id, Snowflake::new(1), role.id)
            .await
            .unwrap();
        platform
            .add_role(guild().id, Snowflake::new(1), role.id)
            .await
            .unwrap();

        assert_eq!(platform.member_roles(guild().id, Snowflake::new(1)).len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_guild_errors() {
        let platform = MemoryPlatform::new();
        let err = platform.guild_roles(Snowflake::new(404)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_text_channels_excludes_voice() {
        let platform = MemoryPlatform::new();
        platform.seed_channel(Channel::text(Snowflake::new(5), guild(), "welcome"));
        platform.seed_channel(Channel::voice(Snowflake::new(6), guild(), "lounge"));

        let channels = platform.text_channels(guild().id).await.unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "welcome");
    }
}
