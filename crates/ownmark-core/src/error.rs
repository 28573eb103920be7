use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a marking run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Input file containing nodes does not exist: \"{}\"", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Node names must include \"@\" and be in form: NAME@DOMAIN (line {line}: \"{content}\")")]
    MalformedInput { line: usize, content: String },

    #[error("Batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
