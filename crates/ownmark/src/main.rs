//! CLI entry point for ownmark.
//!
//! Status lines go to stdout; diagnostics from `tracing` go to stderr and
//! are filtered with `RUST_LOG` (default: warn).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ownmark::cli::Cli;
use ownmark::config::Settings;
use ownmark::{RunError, RunOutcome};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match execute(&cli).await {
        Ok(RunOutcome::Completed { .. }) => ExitCode::SUCCESS,
        Ok(RunOutcome::Interrupted { .. }) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            println!("{} {e}", e.marker());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<RunOutcome, RunError> {
    let settings = Settings::resolve(cli)?;
    let mut stdout = std::io::stdout().lock();
    ownmark::run(&settings, &cli.nodes_list, interrupt_signal(), &mut stdout).await
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
