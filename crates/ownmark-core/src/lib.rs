//! ownmark-core: Name loading, batching, and progress accounting.
//!
//! This crate holds everything that does not talk to Neo4j:
//! - Parsing the input file into an ordered list of principal names
//! - Splitting that list into bounded batches
//! - Tracking batch timings and estimating time to completion
//! - Batch-level settings shared by the CLI and the graph client

pub mod batch;
pub mod config;
pub mod error;
pub mod names;
pub mod progress;

pub use batch::{batches, Batch};
pub use config::MarkSettings;
pub use error::CoreError;
pub use names::{load_names, parse_names, NameList};
pub use progress::{BatchReport, Progress};
