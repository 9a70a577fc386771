//! # steward-service
//!
//! Application layer: the event-to-notification pipeline. Classifies incoming
//! platform events into human-readable notifications, routes them to the
//! admin direct-message sink and the per-subject audit log, and performs the
//! idempotent provisioning (default role, named text channels) the pipeline
//! depends on.

pub mod audit;
pub mod classify;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod notify;
pub mod platform;
pub mod provision;

pub use audit::ActivityLog;
pub use classify::{classify, MemberChange, Notification};
pub use dispatch::Relay;
pub use error::{ServiceError, ServiceResult};
pub use notify::AdminNotifier;
pub use platform::MemoryPlatform;
pub use provision::Provisioner;
