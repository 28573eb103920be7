//! Human-readable status lines written to stdout.
//!
//! Every line starts with a severity marker: `[.]` step, `[+]` success,
//! `[*]` advisory, `[-]`/`[!]` failure.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use ownmark_core::{Batch, BatchReport};

pub enum Status<'a> {
    Connected,
    Advisory,
    ToBeMarked(usize),
    Marking(&'a Batch<'a>),
    Marked(&'a BatchReport),
    Interrupted,
    Done(Duration),
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => write!(f, "[.] Connected to neo4j instance."),
            Self::Advisory => write!(
                f,
                "[*] Warning: Working with a large number of nodes may be time-consuming in large databases.\n\
                 \te.g. setting 1000 nodes as owned can take up to 10 minutes easily.\n"
            ),
            Self::ToBeMarked(n) => write!(f, "[+] To be marked: {n} nodes."),
            Self::Marking(batch) => {
                write!(f, "[.] Marking nodes ({}..{}) ...", batch.start, batch.end())
            }
            Self::Marked(report) => write!(
                f,
                "[+] Marked {} nodes in {:.3} seconds. Finish ETA: in {:.3} seconds.",
                report.batch_len,
                report.batch_elapsed.as_secs_f64(),
                report.eta.as_secs_f64()
            ),
            Self::Interrupted => write!(f, "[.] User interruption."),
            Self::Done(elapsed) => write!(
                f,
                "\n[+] Nodes marked as owned successfully in {:.3} seconds.",
                elapsed.as_secs_f64()
            ),
        }
    }
}

/// Write one status line.
pub fn emit(out: &mut dyn Write, status: Status<'_>) -> std::io::Result<()> {
    writeln!(out, "{status}")?;
    out.flush()
}
