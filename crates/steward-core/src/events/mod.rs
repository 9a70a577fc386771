//! Structured platform events

mod platform_event;

pub use platform_event::{CommandInvocation, GuildSnapshot, PlatformEvent};
