//! console-probe CLI: run the console checks once and print the results.
//!
//! Logging: set `RUST_LOG=console_probe=debug` to see per-request logs on stderr.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use console_probe::{ProbeRunner, ProbeTarget};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // RUST_LOG overrides; stdout is reserved for report lines.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("console_probe=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let runner = ProbeRunner::new(ProbeTarget::default())?;
    let mut stdout = std::io::stdout().lock();
    // Check failures are only reported, never turned into an exit status.
    runner.run(&mut stdout).await?;
    Ok(())
}
