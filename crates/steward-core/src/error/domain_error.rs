//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Guild not found: {0}")]
    GuildNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Role not found: {0}")]
    RoleNotFound(Snowflake),

    #[error("Member {user_id} not found in guild {guild_id}")]
    MemberNotFound {
        guild_id: Snowflake,
        user_id: Snowflake,
    },

    /// Platform API call failed (network, permission, rate limit)
    #[error("Platform API error: {0}")]
    Api(String),
}

impl DomainError {
    /// Create a platform API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::GuildNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::RoleNotFound(_)
                | Self::MemberNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DomainError::GuildNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::api("rate limited").is_not_found());
    }

    #[test]
    fn test_display() {
        let err = DomainError::MemberNotFound {
            guild_id: Snowflake::new(100),
            user_id: Snowflake::new(1),
        };
        assert_eq!(err.to_string(), "Member 1 not found in guild 100");
    }
}
