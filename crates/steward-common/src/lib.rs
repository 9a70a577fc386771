//! # steward-common
//!
//! Shared utilities for the steward workspace: environment-driven
//! configuration and tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, Environment};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
