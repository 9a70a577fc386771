//! Member entity - a user's membership in a guild

use serde::{Deserialize, Serialize};

use crate::entities::{Guild, Presence, Role};
use crate::value_objects::Snowflake;

/// Guild member snapshot
///
/// Carries everything an event handler needs to describe the member: the
/// account name, the optional per-guild nickname, the presence breakdown,
/// and the role list in platform iteration order (including `@everyone`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub guild: Guild,
    #[serde(default)]
    pub presence: Presence,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Member {
    /// Create a new member snapshot with no nickname, presence, or roles
    pub fn new(user_id: Snowflake, name: impl Into<String>, guild: Guild) -> Self {
        Self {
            user_id,
            name: name.into(),
            nickname: None,
            guild,
            presence: Presence::default(),
            roles: Vec::new(),
        }
    }

    /// Display name (nickname if set, otherwise the account name)
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }

    /// Check whether the member's only role is the implicit @everyone role
    pub fn has_only_everyone_role(&self) -> bool {
        self.roles.len() == 1 && self.roles[0].is_everyone()
    }

    /// Check if member holds a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.iter().any(|r| r.id == role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EVERYONE_ROLE;

    fn guild() -> Guild {
        Guild::new(Snowflake::new(100), "UTGOP")
    }

    #[test]
    fn test_display_name_falls_back_to_account_name() {
        let mut member = Member::new(Snowflake::new(1), "Ann", guild());
        assert_eq!(member.display_name(), "Ann");

        member.nickname = Some("Annie".to_string());
        assert_eq!(member.display_name(), "Annie");
    }

    #[test]
    fn test_only_everyone_role() {
        let mut member = Member::new(Snowflake::new(1), "Ann", guild());
        assert!(!member.has_only_everyone_role());

        member.roles.push(Role::new(Snowflake::new(10), EVERYONE_ROLE));
        assert!(member.has_only_everyone_role());

        member.roles.push(Role::new(Snowflake::new(11), "Plebs"));
        assert!(!member.has_only_everyone_role());
    }

    #[test]
    fn test_has_role() {
        let mut member = Member::new(Snowflake::new(1), "Ann", guild());
        member.roles.push(Role::new(Snowflake::new(11), "Plebs"));
        assert!(member.has_role(Snowflake::new(11)));
        assert!(!member.has_role(Snowflake::new(12)));
    }
}
