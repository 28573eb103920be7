//! Top-level run: load → connect → mark → close.

use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use ownmark_core::{load_names, MarkSettings};
use ownmark_graph::GraphClient;

use crate::config::Settings;
use crate::error::{Result, RunError};
use crate::runner::{mark_all, RunOutcome};
use crate::status::{emit, Status};

/// Mark every principal listed in `nodes_list` as owned.
///
/// The input is fully validated before any connection is attempted. Once
/// connected, the client is closed on every exit path. `interrupt` resolving
/// while batches are running stops the run early.
pub async fn run<F>(
    settings: &Settings,
    nodes_list: &Path,
    interrupt: F,
    out: &mut dyn Write,
) -> Result<RunOutcome>
where
    F: Future<Output = ()>,
{
    let program_start = Instant::now();

    let names = load_names(nodes_list)?;
    tracing::info!(count = names.len(), path = %nodes_list.display(), "Node names loaded");

    let graph = GraphClient::connect(&settings.neo4j)
        .await
        .map_err(RunError::Connect)?;

    if let Err(e) = announce(out, &settings.mark, names.len()) {
        graph.close();
        return Err(e.into());
    }

    let outcome = mark_all(graph, &names, &settings.mark, interrupt, out).await?;

    match &outcome {
        RunOutcome::Interrupted { .. } => emit(out, Status::Interrupted)?,
        RunOutcome::Completed { marked, .. } => {
            let elapsed = program_start.elapsed();
            tracing::info!(marked, elapsed_ms = elapsed.as_millis() as u64, "Run complete");
            emit(out, Status::Done(elapsed))?;
        }
    }

    Ok(outcome)
}

fn announce(out: &mut dyn Write, mark: &MarkSettings, count: usize) -> std::io::Result<()> {
    emit(out, Status::Connected)?;
    if mark.needs_advisory(count) {
        emit(out, Status::Advisory)?;
    }
    emit(out, Status::ToBeMarked(count))
}
