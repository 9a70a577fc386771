//! Port traits - the interface boundary to the platform runtime

mod platform;

pub use platform::{CreateRole, Platform, PlatformResult};
