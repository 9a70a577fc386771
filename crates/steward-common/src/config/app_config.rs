//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).
//! Every knob has a default so a bare environment still yields a usable
//! configuration; the admin identity is the one value that must be supplied
//! (from the environment or the bootstrap file) and is validated strictly.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use steward_core::Snowflake;

/// Platform user identifiers are exactly this many decimal digits.
pub const ADMIN_ID_DIGITS: usize = 18;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The admin identity must be an 18-digit decimal number. A malformed
    /// value is fatal at startup: with no valid admin identity every
    /// notification would fail.
    #[error("Invalid admin identity {value:?}: expected exactly {ADMIN_ID_DIGITS} decimal digits")]
    InvalidAdminId { value: String },

    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub channels: ChannelNames,
    pub provisioning: ProvisioningConfig,
    pub storage: StorageConfig,
    pub bootstrap: BootstrapConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Names of the text channels the relay sends into (ensured on first use)
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelNames {
    #[serde(default = "default_welcome_channel")]
    pub welcome: String,
    #[serde(default = "default_admin_channel")]
    pub admin: String,
}

/// Provisioning settings
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisioningConfig {
    /// Name of the default role granted to new and unroled members
    #[serde(default = "default_role_name")]
    pub default_role: String,
}

/// Local filesystem layout
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the per-subject audit logs
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Directory holding static command assets (map image, phone list)
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

/// Bootstrap file locations and optional environment overrides
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    #[serde(default = "default_admin_id_file")]
    pub admin_id_file: PathBuf,
    /// Admin identity supplied directly via environment, bypassing the file
    #[serde(default)]
    pub admin_id: Option<Snowflake>,
}

// Default value functions

fn default_app_name() -> String {
    "steward".to_string()
}

fn default_welcome_channel() -> String {
    "welcome".to_string()
}

fn default_admin_channel() -> String {
    "admin".to_string()
}

fn default_role_name() -> String {
    "Plebs".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_token_file() -> PathBuf {
    PathBuf::from("token.txt")
}

fn default_admin_id_file() -> PathBuf {
    PathBuf::from("admin_id.txt")
}

/// Parse and validate an admin identity string.
///
/// The value must be exactly [`ADMIN_ID_DIGITS`] ASCII digits; anything else
/// is rejected so a misconfigured identity fails at startup rather than on
/// the first notification.
pub fn parse_admin_id(raw: &str) -> Result<Snowflake, ConfigError> {
    let value = raw.trim();
    if value.len() != ADMIN_ID_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidAdminId {
            value: value.to_string(),
        });
    }
    Snowflake::parse(value).map_err(|_| ConfigError::InvalidAdminId {
        value: value.to_string(),
    })
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `STEWARD_ADMIN_ID` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let admin_id = match env::var("STEWARD_ADMIN_ID") {
            Ok(raw) => Some(parse_admin_id(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("STEWARD_APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("STEWARD_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            channels: ChannelNames {
                welcome: env::var("STEWARD_WELCOME_CHANNEL")
                    .unwrap_or_else(|_| default_welcome_channel()),
                admin: env::var("STEWARD_ADMIN_CHANNEL")
                    .unwrap_or_else(|_| default_admin_channel()),
            },
            provisioning: ProvisioningConfig {
                default_role: env::var("STEWARD_DEFAULT_ROLE")
                    .unwrap_or_else(|_| default_role_name()),
            },
            storage: StorageConfig {
                log_dir: env::var("STEWARD_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_log_dir()),
                asset_dir: env::var("STEWARD_ASSET_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_asset_dir()),
            },
            bootstrap: BootstrapConfig {
                token_file: env::var("STEWARD_TOKEN_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_token_file()),
                admin_id_file: env::var("STEWARD_ADMIN_ID_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_admin_id_file()),
                admin_id,
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            channels: ChannelNames {
                welcome: default_welcome_channel(),
                admin: default_admin_channel(),
            },
            provisioning: ProvisioningConfig {
                default_role: default_role_name(),
            },
            storage: StorageConfig {
                log_dir: default_log_dir(),
                asset_dir: default_asset_dir(),
            },
            bootstrap: BootstrapConfig {
                token_file: default_token_file(),
                admin_id_file: default_admin_id_file(),
                admin_id: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "steward");
        assert_eq!(config.channels.welcome, "welcome");
        assert_eq!(config.channels.admin, "admin");
        assert_eq!(config.provisioning.default_role, "Plebs");
        assert_eq!(config.storage.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_parse_admin_id_valid() {
        let id = parse_admin_id("175928847299117063").unwrap();
        assert_eq!(id, Snowflake::new(175_928_847_299_117_063));
    }

    #[test]
    fn test_parse_admin_id_trims_whitespace() {
        let id = parse_admin_id("175928847299117063\n").unwrap();
        assert_eq!(id, Snowflake::new(175_928_847_299_117_063));
    }

    #[test]
    fn test_parse_admin_id_rejects_wrong_length() {
        assert!(matches!(
            parse_admin_id("12345"),
            Err(ConfigError::InvalidAdminId { .. })
        ));
        assert!(matches!(
            parse_admin_id("1234567890123456789"),
            Err(ConfigError::InvalidAdminId { .. })
        ));
    }

    #[test]
    fn test_parse_admin_id_rejects_non_digits() {
        assert!(matches!(
            parse_admin_id("17592884729911706x"),
            Err(ConfigError::InvalidAdminId { .. })
        ));
        assert!(matches!(
            parse_admin_id(""),
            Err(ConfigError::InvalidAdminId { .. })
        ));
    }
}
