//! Batch-level settings for a marking run.
//!
//! Loaded from the `[mark]` section of `ownmark.toml` or
//! `OWNMARK__MARK__` environment variables, then overridden by CLI flags.

use serde::Deserialize;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MarkSettings {
    /// Names per statement. Above ~1000 the server may run out of heap.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Name count at which the slow-run advisory is printed.
    #[serde(default = "default_advisory_threshold")]
    pub advisory_threshold: usize,
}

impl MarkSettings {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(CoreError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }

    pub fn needs_advisory(&self, name_count: usize) -> bool {
        name_count >= self.advisory_threshold
    }
}

fn default_batch_size() -> usize {
    500
}

fn default_advisory_threshold() -> usize {
    200
}

impl Default for MarkSettings {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            advisory_threshold: default_advisory_threshold(),
        }
    }
}
