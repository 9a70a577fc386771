//! # steward-bot
//!
//! Binary wiring for the relay: credential bootstrapping and the NDJSON
//! event replay loop. The live gateway connector is an external collaborator;
//! this crate feeds the dispatcher from a structured event stream.

pub mod bootstrap;
pub mod replay;
