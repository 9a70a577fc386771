//! Platform entity snapshots
//!
//! These are read-side snapshots of entities owned by the chat platform.
//! The relay never mutates them directly; it requests mutations through the
//! `Platform` port and receives fresh snapshots with later events.

mod channel;
mod guild;
mod member;
mod presence;
mod role;

pub use channel::{Channel, ChannelKind};
pub use guild::Guild;
pub use member::Member;
pub use presence::{Presence, UserStatus, VoiceState};
pub use role::{Role, EVERYONE_ROLE};
