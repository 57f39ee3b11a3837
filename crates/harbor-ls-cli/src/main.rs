//! harbor-ls - List the contents of a Harbor registry.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harbor_ls_registry::{RegistryClient, RegistryConfig};
use harbor_ls_scanner::{PathFilter, ScanConfig, ScanEngine};

mod cli;
mod output;

use cli::{Cli, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.level);

    // An interrupt ends the run without a report.
    tokio::select! {
        result = run(&cli) => result,
        signal = tokio::signal::ctrl_c() => interrupted(signal),
    }
}

/// Maps the outcome of waiting for Ctrl-C to the process result.
fn interrupted(signal: std::io::Result<()>) -> Result<()> {
    signal.context("Failed to listen for interrupt")
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.directive().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let mut config =
        RegistryConfig::new(&cli.registry).with_credentials(&cli.user, &cli.password);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let client = RegistryClient::new(config).context("Failed to create registry client")?;
    let engine = ScanEngine::new(
        client,
        PathFilter::parse(&cli.filters),
        ScanConfig::default().with_concurrency(cli.concurrency),
    );

    let result = engine.scan().await;
    let report = output::render(&result, cli.format).context("Failed to render report")?;

    std::io::stdout()
        .lock()
        .write_all(report.as_bytes())
        .context("Failed to write report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_exits_cleanly() {
        assert!(interrupted(Ok(())).is_ok());
    }

    #[test]
    fn test_interrupt_listener_failure_is_reported() {
        let err = interrupted(Err(std::io::Error::other("no signal driver"))).unwrap_err();
        assert_eq!(err.to_string(), "Failed to listen for interrupt");
        assert!(format!("{err:#}").contains("no signal driver"));
    }
}
