//! Provisioning - idempotent ensure-or-create for the default role and for
//! named text channels
//!
//! Lookup-then-create is not atomic on the platform side, so each resource
//! key gets its own async mutex: concurrent joins in a fresh guild serialize
//! on the guild's lock instead of both observing "absent" and creating the
//! role twice.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use steward_core::{Channel, CreateRole, Guild, Platform, Role, Snowflake};

use crate::error::ServiceResult;
use crate::notify::AdminNotifier;

/// Audit reason recorded when a missing text channel is created.
const CHANNEL_CREATE_REASON: &str = "Text channel was requested but did not exist.";

/// Audit reason recorded when the default role is created.
const ROLE_CREATE_REASON: &str = "Default role for new members.";

/// Idempotent role/channel provisioning
pub struct Provisioner {
    platform: Arc<dyn Platform>,
    notifier: AdminNotifier,
    default_role: String,
    role_locks: DashMap<Snowflake, Arc<Mutex<()>>>,
    channel_locks: DashMap<(Snowflake, String), Arc<Mutex<()>>>,
}

impl Provisioner {
    /// Create a provisioner that ensures `default_role` exists when granting
    pub fn new(
        platform: Arc<dyn Platform>,
        notifier: AdminNotifier,
        default_role: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            notifier,
            default_role: default_role.into(),
            role_locks: DashMap::new(),
            channel_locks: DashMap::new(),
        }
    }

    /// Name of the default role
    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    /// Ensure the default role exists in `guild` and grant it to `user_id`.
    ///
    /// Final state is always "member holds the role". Creation is announced
    /// to the administrator; the grant happens unconditionally whether the
    /// role pre-existed or was just created.
    #[instrument(skip(self, guild), fields(guild_id = %guild.id))]
    pub async fn ensure_default_role(
        &self,
        guild: &Guild,
        user_id: Snowflake,
    ) -> ServiceResult<Role> {
        let lock = self
            .role_locks
            .entry(guild.id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let existing = self
            .platform
            .guild_roles(guild.id)
            .await?
            .into_iter()
            .find(|role| role.name == self.default_role);

        let role = match existing {
            Some(role) => role,
            None => {
                let role = self
                    .platform
                    .create_role(
                        guild.id,
                        CreateRole {
                            name: &self.default_role,
                            hoist: true,
                            mentionable: true,
                            reason: ROLE_CREATE_REASON,
                        },
                    )
                    .await?;
                info!(guild = %guild.name, role = %role.name, "default role created");
                self.notifier
                    .notify(&format!(
                        "The {} role did not exist, so the bot has created it.",
                        self.default_role
                    ))
                    .await?;
                role
            }
        };

        self.platform.add_role(guild.id, user_id, role.id).await?;
        Ok(role)
    }

    /// Resolve the text channel named `name` in `guild`, creating it if no
    /// exact-name match exists.
    ///
    /// Lookup is case-sensitive; when several channels share the name the
    /// first in platform enumeration order wins.
    #[instrument(skip(self, guild), fields(guild_id = %guild.id))]
    pub async fn ensure_text_channel(
        &self,
        guild: &Guild,
        name: &str,
    ) -> ServiceResult<Channel> {
        let key = (guild.id, name.to_string());
        let lock = self
            .channel_locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let existing = self
            .platform
            .text_channels(guild.id)
            .await?
            .into_iter()
            .find(|channel| channel.name == name);

        if let Some(channel) = existing {
            return Ok(channel);
        }

        let channel = self
            .platform
            .create_text_channel(guild.id, name, CHANNEL_CREATE_REASON)
            .await?;
        info!(guild = %guild.name, channel = %channel.name, "text channel created");
        Ok(channel)
    }
}
