//! ownmark: mark BloodHound principals as owned in Neo4j.
//!
//! Reads a list of `NAME@DOMAIN` principals, connects to Neo4j and sets
//! `owned = true` on every matching node, a bounded batch per statement,
//! printing progress and a finish ETA as it goes.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod status;

pub use app::run;
pub use error::RunError;
pub use runner::{mark_all, OwnedSink, RunOutcome};
