//! Service layer error types
//!
//! Provides a unified error type for all pipeline operations.

use thiserror::Error;

use steward_core::DomainError;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Platform API call failed
    #[error(transparent)]
    Platform(#[from] DomainError),

    /// Audit-log filesystem failure (permission, disk full). Propagates as
    /// fatal to the calling event handler.
    #[error("Audit log I/O error: {0}")]
    Audit(#[from] std::io::Error),

    /// Static asset for a command responder could not be read
    #[error("Asset {name:?} unavailable: {source}")]
    Asset {
        name: String,
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Create an asset error
    pub fn asset(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Asset {
            name: name.into(),
            source,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use steward_core::Snowflake;

    #[test]
    fn test_platform_error_passthrough() {
        let err: ServiceError = DomainError::GuildNotFound(Snowflake::new(7)).into();
        assert_eq!(err.to_string(), "Guild not found: 7");
    }

    #[test]
    fn test_audit_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ServiceError = io.into();
        assert!(err.to_string().starts_with("Audit log I/O error"));
    }
}
