//! Role entity - a guild role snapshot

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Name of the implicit pseudo-role every member holds.
pub const EVERYONE_ROLE: &str = "@everyone";

/// Role snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub mentionable: bool,
}

impl Role {
    /// Create a new role snapshot
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hoist: false,
            mentionable: false,
        }
    }

    /// Check whether this is the implicit @everyone pseudo-role
    #[inline]
    pub fn is_everyone(&self) -> bool {
        self.name == EVERYONE_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everyone_detection() {
        let everyone = Role::new(Snowflake::new(1), EVERYONE_ROLE);
        let plebs = Role::new(Snowflake::new(2), "Plebs");
        assert!(everyone.is_everyone());
        assert!(!plebs.is_everyone());
    }
}
