//! prom-alert-check binary entrypoint
//!
//! Run with: cargo run -- --url http://127.0.0.1:9090
//!
//! Environment variables:
//! - PROMETHEUS_URL: Base path of the Prometheus API
//! - PROMETHEUS_SKIP_VERIFY: Skip TLS certificate verification
//! - PROMETHEUS_CACERT: TLS CA certificate bundle in PEM format
//! - PROMETHEUS_TIMEOUT: Request timeout in seconds
//! - RUST_LOG: Log level (default: info; --verbose raises it to debug)
//!
//! Exit codes follow the monitoring scheduler contract:
//! 0 = ok, 1 = warning (configuration problem), 2 = critical (matching
//! alerts found, or the check itself failed).

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prom_alert_check::check::{render_report, run_check, Status};
use prom_alert_check::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout is reserved for the report.
    let default_filter = if cli.verbose {
        "prom_alert_check=debug"
    } else {
        "prom_alert_check=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(url = %cli.url, "Executing check");

    let config = cli.into_config();
    let status = match run_check(&config).await {
        Ok(matched) if matched.is_empty() => {
            tracing::info!("Check passed, no alerts found.");
            Status::Ok
        }
        Ok(matched) => {
            tracing::info!(count = matched.len(), "FOUND ALERTS");
            match render_report(&matched) {
                Ok(report) => {
                    println!("{report}");
                    Status::Critical
                }
                Err(e) => {
                    tracing::error!(error = %e, "Check failed");
                    e.status()
                }
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Check failed");
            e.status()
        }
    };

    ExitCode::from(status.exit_code())
}
