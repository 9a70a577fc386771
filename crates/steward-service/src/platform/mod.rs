//! Platform implementations
//!
//! The live connector is an external collaborator; this module provides the
//! in-memory implementation used by the replay harness and the test suite.

mod memory;

pub use memory::{DirectMessage, MemoryPlatform, SentFile, SentMessage};
