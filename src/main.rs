//! certwatch - TLS certificate expiry watchdog
//!
//! Checks each configured host once, logs the remaining validity of its
//! certificate and posts a webhook alert when it falls under the threshold.

use certwatch::{runner, CertWatchError, Cli, RunConfig};
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CertWatchError> {
    let config = RunConfig::from_cli(&cli)?;
    tracing::debug!("{:?}", config);

    runner::run_once(&config).await?;
    Ok(())
}
