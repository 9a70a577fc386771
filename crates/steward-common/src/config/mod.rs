//! Configuration module

mod app_config;

pub use app_config::{
    parse_admin_id, AppConfig, AppSettings, BootstrapConfig, ChannelNames, ConfigError,
    Environment, ProvisioningConfig, StorageConfig, ADMIN_ID_DIGITS,
};
