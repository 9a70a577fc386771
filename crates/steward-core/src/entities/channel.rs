//! Channel entity - a guild channel snapshot

use serde::{Deserialize, Serialize};

use crate::entities::Guild;
use crate::value_objects::Snowflake;

/// Channel kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Guild text channel
    #[default]
    Text,
    /// Guild voice channel
    Voice,
    /// Category for organizing channels
    Category,
}

/// Channel snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    pub guild: Guild,
    pub name: String,
    #[serde(default)]
    pub kind: ChannelKind,
}

impl Channel {
    /// Create a new text channel snapshot
    pub fn text(id: Snowflake, guild: Guild, name: impl Into<String>) -> Self {
        Self {
            id,
            guild,
            name: name.into(),
            kind: ChannelKind::Text,
        }
    }

    /// Create a new voice channel snapshot
    pub fn voice(id: Snowflake, guild: Guild, name: impl Into<String>) -> Self {
        Self {
            id,
            guild,
            name: name.into(),
            kind: ChannelKind::Voice,
        }
    }

    /// Check whether this is a text channel
    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == ChannelKind::Text
    }
}
