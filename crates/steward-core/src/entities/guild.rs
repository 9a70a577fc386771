//! Guild entity - a connected community

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Guild snapshot (the community a member/channel belongs to)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
}

impl Guild {
    /// Create a new guild snapshot
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Guild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
