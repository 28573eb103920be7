//! Error types for a marking run.

use ownmark_core::CoreError;
use ownmark_graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Load(#[from] CoreError),

    #[error("Could not connect to the neo4j database. Reason: {0}")]
    Connect(#[source] GraphError),

    #[error("Marking nodes ({start}..{end}) failed: {source}")]
    Transaction {
        start: usize,
        end: usize,
        #[source]
        source: GraphError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    /// Severity marker printed in front of the diagnostic.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::Load(_) => "[!]",
            Self::Connect(_) | Self::Transaction { .. } | Self::Io(_) => "[-]",
        }
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
