//! Event Dispatcher - one entry point per platform event category
//!
//! Each handler classifies its event into a notification, then routes the
//! body to the audit log and the admin notifier, ensuring roles/channels
//! through provisioning where the event implies a membership or channel
//! change. Within a handler the sink calls are sequential and errors
//! propagate, so a failed earlier sink prevents the later one (deliberately
//! preserved behavior).

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use steward_common::AppConfig;
use steward_core::{
    Channel, CommandInvocation, Guild, GuildSnapshot, Member, Platform, PlatformEvent, Snowflake,
    VoiceState,
};

use crate::audit::ActivityLog;
use crate::classify::classify;
use crate::command::{self, Command};
use crate::error::{ServiceError, ServiceResult};
use crate::format::{ljust, pad_message, PREFIX_WIDTH};
use crate::notify::AdminNotifier;
use crate::provision::Provisioner;

/// The event-to-notification relay
pub struct Relay {
    platform: Arc<dyn Platform>,
    notifier: AdminNotifier,
    activity: ActivityLog,
    provisioner: Provisioner,
    app_name: String,
    welcome_channel: String,
    admin_channel: String,
    asset_dir: PathBuf,
}

impl Relay {
    /// Wire up the relay from configuration and a platform connection
    pub fn new(platform: Arc<dyn Platform>, config: &AppConfig, admin_id: Snowflake) -> Self {
        let notifier = AdminNotifier::new(Arc::clone(&platform), admin_id);
        let provisioner = Provisioner::new(
            Arc::clone(&platform),
            notifier.clone(),
            config.provisioning.default_role.clone(),
        );
        Self {
            platform,
            notifier,
            activity: ActivityLog::new(config.storage.log_dir.clone()),
            provisioner,
            app_name: config.app.name.clone(),
            welcome_channel: config.channels.welcome.clone(),
            admin_channel: config.channels.admin.clone(),
            asset_dir: config.storage.asset_dir.clone(),
        }
    }

    /// The audit log this relay writes to
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Route one platform event to its handler
    pub async fn handle_event(&self, event: &PlatformEvent) -> ServiceResult<()> {
        match event {
            PlatformEvent::Ready { guilds } => self.ready(guilds).await,
            PlatformEvent::MemberUpdate { before, after } => {
                self.member_updated(before, after).await
            }
            PlatformEvent::MemberJoin { member } => self.member_joined(member).await,
            PlatformEvent::MemberRemove { member } => self.member_removed(member).await,
            PlatformEvent::MemberBan { guild, member } => self.member_banned(guild, member).await,
            PlatformEvent::VoiceStateUpdate {
                member,
                before,
                after,
            } => self.voice_state_updated(member, before, after).await,
            PlatformEvent::ChannelCreate { channel } => self.channel_created(channel).await,
            PlatformEvent::ChannelDelete { channel } => self.channel_deleted(channel).await,
            PlatformEvent::Command { invocation } => self.command_invoked(invocation).await,
        }
    }

    /// Startup: padded banner to the administrator, then a role backfill for
    /// every member whose only role is the implicit @everyone role.
    #[instrument(skip_all)]
    pub async fn ready(&self, guilds: &[GuildSnapshot]) -> ServiceResult<()> {
        let banner = format!("{}\n", pad_message(&format!("{} is now online!", self.app_name)));
        self.notifier.send_raw(&banner, false).await?;

        for snapshot in guilds {
            for member in &snapshot.members {
                if member.has_only_everyone_role() {
                    self.provisioner
                        .ensure_default_role(&snapshot.guild, member.user_id)
                        .await?;
                }
            }
        }
        info!(guilds = guilds.len(), "startup complete");
        Ok(())
    }

    /// Member status/nickname/display-name/role update
    #[instrument(skip_all, fields(member = %before.name))]
    pub async fn member_updated(&self, before: &Member, after: &Member) -> ServiceResult<()> {
        let note = classify(before, after);
        self.activity.append(&note.subject, &note.body).await?;
        self.notifier.notify(&note.body).await?;
        info!(change = ?note.change, "member update relayed");
        Ok(())
    }

    /// Member joined: welcome message, notification, audit entry, default
    /// role grant (awaited; the grant completes before the handler returns).
    #[instrument(skip_all, fields(member = %member.display_name(), guild = %member.guild.name))]
    pub async fn member_joined(&self, member: &Member) -> ServiceResult<()> {
        let welcome = self
            .provisioner
            .ensure_text_channel(&member.guild, &self.welcome_channel)
            .await?;
        self.platform
            .send_message(
                welcome.id,
                &format!(
                    "Welcome {} to {}!",
                    member.display_name(),
                    member.guild.name
                ),
                true,
            )
            .await?;

        let body = format!("{} has joined {}!", member.display_name(), member.guild.name);
        self.notifier.notify(&body).await?;
        self.activity.append(member.display_name(), &body).await?;

        self.provisioner
            .ensure_default_role(&member.guild, member.user_id)
            .await?;
        Ok(())
    }

    /// Member left the guild
    #[instrument(skip_all, fields(member = %member.display_name()))]
    pub async fn member_removed(&self, member: &Member) -> ServiceResult<()> {
        let body = format!("{} has left {}.", member.display_name(), member.guild.name);

        let welcome = self
            .provisioner
            .ensure_text_channel(&member.guild, &self.welcome_channel)
            .await?;
        self.platform.send_message(welcome.id, &body, false).await?;
        self.notifier.notify(&body).await?;
        self.activity.append(member.display_name(), &body).await?;
        Ok(())
    }

    /// Member banned from the guild
    #[instrument(skip_all, fields(member = %member.display_name()))]
    pub async fn member_banned(&self, guild: &Guild, member: &Member) -> ServiceResult<()> {
        let body = format!(
            "Member {} has been banned from {}!",
            member.display_name(),
            guild.name
        );

        let welcome = self
            .provisioner
            .ensure_text_channel(guild, &self.welcome_channel)
            .await?;
        self.platform.send_message(welcome.id, &body, true).await?;
        self.notifier.notify(&body).await?;
        self.activity.append(member.display_name(), &body).await?;
        Ok(())
    }

    /// Member joined or left a voice channel
    #[instrument(skip_all, fields(member = %member.display_name()))]
    pub async fn voice_state_updated(
        &self,
        member: &Member,
        before: &VoiceState,
        after: &VoiceState,
    ) -> ServiceResult<()> {
        let (verb, channel) = match (&after.channel, &before.channel) {
            (Some(channel), _) => ("joined", channel),
            (None, Some(channel)) => ("left", channel),
            (None, None) => {
                warn!("voice state update with no channel on either side");
                return Ok(());
            }
        };
        let body = format!(
            "{}{}",
            ljust(
                &format!("{} {verb} voice channel_name: ", member.display_name()),
                PREFIX_WIDTH
            ),
            channel.name
        );
        self.notifier.notify(&body).await?;
        self.activity.append(member.display_name(), &body).await?;
        Ok(())
    }

    /// Guild channel created: admin channel broadcast plus admin DM, no
    /// audit-log write.
    #[instrument(skip_all, fields(channel = %channel.name))]
    pub async fn channel_created(&self, channel: &Channel) -> ServiceResult<()> {
        let body = format!(
            "A new channel_name named \"{}\" has been created.",
            channel.name
        );
        self.send_to_admin_channel(&channel.guild, &body).await
    }

    /// Guild channel deleted
    #[instrument(skip_all, fields(channel = %channel.name))]
    pub async fn channel_deleted(&self, channel: &Channel) -> ServiceResult<()> {
        let body = format!("The channel_name \"{}\" has been deleted.", channel.name);
        self.send_to_admin_channel(&channel.guild, &body).await
    }

    async fn send_to_admin_channel(&self, guild: &Guild, body: &str) -> ServiceResult<()> {
        let admin = self
            .provisioner
            .ensure_text_channel(guild, &self.admin_channel)
            .await?;
        self.platform.send_message(admin.id, body, false).await?;
        self.notifier.notify(body).await?;
        Ok(())
    }

    /// Text command invocation. Unrecognized names are silently ignored;
    /// recognized commands propagate their errors.
    #[instrument(skip_all, fields(command = %invocation.name))]
    pub async fn command_invoked(&self, invocation: &CommandInvocation) -> ServiceResult<()> {
        let Some(command) = Command::parse(&invocation.name, &invocation.args) else {
            return Ok(());
        };

        match command {
            Command::Broadcast { channel, message } => {
                if invocation.author_id != self.notifier.admin_id() {
                    return Ok(());
                }
                let target = self
                    .provisioner
                    .ensure_text_channel(&invocation.guild, &channel)
                    .await?;
                self.platform.send_message(target.id, &message, true).await?;
                self.platform
                    .send_message(
                        invocation.channel_id,
                        &format!("Broadcast to #{channel} sent: {message}"),
                        false,
                    )
                    .await?;
            }
            Command::Map => self.send_asset(invocation.channel_id, command::MAP_IMAGE).await?,
            Command::Tables | Command::Chairs => {
                self.send_asset(invocation.channel_id, command::TABLES_IMAGE)
                    .await?;
            }
            Command::Phone => {
                let path = self.asset_dir.join(command::PHONE_LIST);
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| ServiceError::asset(command::PHONE_LIST, e))?;
                self.platform
                    .send_message(invocation.channel_id, &text, false)
                    .await?;
            }
            Command::Allocation => {
                self.platform
                    .send_message(invocation.channel_id, &command::render_allocation(), false)
                    .await?;
            }
        }
        Ok(())
    }

    async fn send_asset(&self, channel_id: Snowflake, name: &str) -> ServiceResult<()> {
        let path = self.asset_dir.join(name);
        self.platform.send_file(channel_id, &path).await?;
        Ok(())
    }
}
