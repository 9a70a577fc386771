//! Presence and voice-state snapshots

use serde::{Deserialize, Serialize};

use crate::entities::Channel;

/// User online status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// User is online and active
    Online,
    /// User is idle (away from keyboard)
    Idle,
    /// Do not disturb
    Dnd,
    /// User is offline (or invisible)
    #[default]
    Offline,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Idle => write!(f, "idle"),
            Self::Dnd => write!(f, "dnd"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "idle" => Ok(Self::Idle),
            "dnd" => Ok(Self::Dnd),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("invalid status: {s}")),
        }
    }
}

/// Per-device presence snapshot
///
/// The platform reports the overall status plus a per-device breakdown; a
/// device that is not connected reports `Offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Presence {
    pub status: UserStatus,
    #[serde(default)]
    pub mobile_status: UserStatus,
    #[serde(default)]
    pub web_status: UserStatus,
}

impl Presence {
    /// Presence with the given overall status and both devices offline
    pub fn desktop(status: UserStatus) -> Self {
        Self {
            status,
            mobile_status: UserStatus::Offline,
            web_status: UserStatus::Offline,
        }
    }
}

/// Voice-channel occupancy snapshot (`None` when not in a voice channel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VoiceState {
    pub channel: Option<Channel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_lowercase() {
        assert_eq!(UserStatus::Online.to_string(), "online");
        assert_eq!(UserStatus::Dnd.to_string(), "dnd");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("IDLE".parse::<UserStatus>().unwrap(), UserStatus::Idle);
        assert!("away".parse::<UserStatus>().is_err());
    }

    #[test]
    fn test_desktop_presence_devices_offline() {
        let presence = Presence::desktop(UserStatus::Online);
        assert_eq!(presence.status, UserStatus::Online);
        assert_eq!(presence.mobile_status, UserStatus::Offline);
        assert_eq!(presence.web_status, UserStatus::Offline);
    }
}
