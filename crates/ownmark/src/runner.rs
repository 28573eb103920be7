//! The batch loop.
//!
//! Batches are submitted strictly in order, one at a time. An interrupt
//! abandons the in-flight batch and stops the loop; the sink is released
//! exactly once whichever way the loop ends.

use std::future::Future;
use std::io::Write;
use std::time::{Duration, Instant};

use ownmark_core::batch::batch_count;
use ownmark_core::{batches, MarkSettings, Progress};
use ownmark_graph::{GraphClient, GraphError};

use crate::error::{Result, RunError};
use crate::status::{emit, Status};

/// Destination for owned-flag batches.
#[allow(async_fn_in_trait)]
pub trait OwnedSink {
    /// Flag every name in `names` as owned.
    async fn submit(&mut self, names: &[String]) -> std::result::Result<(), GraphError>;

    /// Release the underlying connection.
    async fn release(self);
}

impl OwnedSink for GraphClient {
    async fn submit(&mut self, names: &[String]) -> std::result::Result<(), GraphError> {
        self.mark_owned(names).await
    }

    async fn release(self) {
        self.close();
    }
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        marked: usize,
        batches: usize,
        elapsed: Duration,
    },
    Interrupted {
        marked: usize,
        completed_batches: usize,
    },
}

/// Submit `names` to `sink` in batches of `settings.batch_size`, reporting
/// progress to `out`, until done, interrupted, or a batch fails.
///
/// `sink` is released before returning on every path.
pub async fn mark_all<S, F>(
    mut sink: S,
    names: &[String],
    settings: &MarkSettings,
    interrupt: F,
    out: &mut dyn Write,
) -> Result<RunOutcome>
where
    S: OwnedSink,
    F: Future<Output = ()>,
{
    let result = drive(&mut sink, names, settings, interrupt, out).await;
    sink.release().await;
    result
}

async fn drive<S, F>(
    sink: &mut S,
    names: &[String],
    settings: &MarkSettings,
    interrupt: F,
    out: &mut dyn Write,
) -> Result<RunOutcome>
where
    S: OwnedSink,
    F: Future<Output = ()>,
{
    settings.validate()?;
    tokio::pin!(interrupt);

    let total_batches = batch_count(names.len(), settings.batch_size);
    let mut progress = Progress::new(names.len(), total_batches);

    for batch in batches(names, settings.batch_size) {
        emit(out, Status::Marking(&batch))?;
        let started = Instant::now();

        tokio::select! {
            biased;
            _ = &mut interrupt => {
                tracing::warn!(
                    completed_batches = progress.batches_done(),
                    total_batches,
                    "Run interrupted"
                );
                return Ok(RunOutcome::Interrupted {
                    marked: progress.marked(),
                    completed_batches: progress.batches_done(),
                });
            }
            res = sink.submit(batch.names) => {
                res.map_err(|source| RunError::Transaction {
                    start: batch.start,
                    end: batch.end(),
                    source,
                })?;
            }
        }

        let report = progress.record(batch.len(), started.elapsed());
        tracing::debug!(
            start = batch.start,
            end = batch.end(),
            total = progress.total_names(),
            elapsed_ms = report.batch_elapsed.as_millis() as u64,
            eta_ms = report.eta.as_millis() as u64,
            "Batch marked"
        );
        emit(out, Status::Marked(&report))?;
    }

    Ok(RunOutcome::Completed {
        marked: progress.marked(),
        batches: progress.batches_done(),
        elapsed: progress.total_elapsed(),
    })
}
