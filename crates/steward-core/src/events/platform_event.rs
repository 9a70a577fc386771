//! Platform event model
//!
//! One variant per event category the platform runtime delivers. Each carries
//! the structured payload (member/channel/guild references, before/after
//! snapshots where applicable) the handlers need; the wire form is a tagged
//! JSON object with a SCREAMING_SNAKE_CASE `type` field.

use serde::{Deserialize, Serialize};

use crate::entities::{Channel, Guild, Member, VoiceState};
use crate::value_objects::Snowflake;

/// A guild together with its full member list, as delivered at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSnapshot {
    pub guild: Guild,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A text command invocation relayed by the platform runtime.
///
/// Prefix parsing happens upstream; by the time this reaches the relay the
/// command name is already split from its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub guild: Guild,
    pub channel_id: Snowflake,
    pub author_id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Events delivered by the platform runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformEvent {
    /// Connection established; full guild/member state available
    Ready { guilds: Vec<GuildSnapshot> },
    /// Member status, nickname, display name, or role set changed
    MemberUpdate { before: Member, after: Member },
    /// User joined a guild
    MemberJoin { member: Member },
    /// User left a guild
    MemberRemove { member: Member },
    /// User was banned from a guild
    MemberBan { guild: Guild, member: Member },
    /// Member joined or left a voice channel
    VoiceStateUpdate {
        member: Member,
        before: VoiceState,
        after: VoiceState,
    },
    /// Guild channel created
    ChannelCreate { channel: Channel },
    /// Guild channel deleted
    ChannelDelete { channel: Channel },
    /// Text command invoked
    Command { invocation: CommandInvocation },
}

impl PlatformEvent {
    /// Event type name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "READY",
            Self::MemberUpdate { .. } => "MEMBER_UPDATE",
            Self::MemberJoin { .. } => "MEMBER_JOIN",
            Self::MemberRemove { .. } => "MEMBER_REMOVE",
            Self::MemberBan { .. } => "MEMBER_BAN",
            Self::VoiceStateUpdate { .. } => "VOICE_STATE_UPDATE",
            Self::ChannelCreate { .. } => "CHANNEL_CREATE",
            Self::ChannelDelete { .. } => "CHANNEL_DELETE",
            Self::Command { .. } => "COMMAND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_wire_form() {
        let guild = Guild::new(Snowflake::new(100), "UTGOP");
        let event = PlatformEvent::MemberJoin {
            member: Member::new(Snowflake::new(1), "Ann", guild),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"MEMBER_JOIN\""));

        let back: PlatformEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.kind(), "MEMBER_JOIN");
    }

    #[test]
    fn test_command_event_defaults_args() {
        let json = r#"{
            "type": "COMMAND",
            "invocation": {
                "guild": {"id": "100", "name": "UTGOP"},
                "channel_id": "5",
                "author_id": "1",
                "name": "allocation"
            }
        }"#;
        let event: PlatformEvent = serde_json::from_str(json).unwrap();
        match event {
            PlatformEvent::Command { invocation } => {
                assert_eq!(invocation.name, "allocation");
                assert!(invocation.args.is_empty());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
