//! Command-line surface of the check

use std::path::PathBuf;

use clap::Parser;

use crate::check::CheckConfig;

/// A Prometheus alert check for monitoring schedulers.
///
/// Queries the alerts endpoint of a Prometheus server, filters the active
/// alerts against the supplied criteria, and exits 0 (ok), 1 (warning,
/// configuration problem) or 2 (critical, matching alerts or failure).
#[derive(Debug, Parser)]
#[command(name = "prom-alert-check", version, about)]
pub struct Cli {
    /// The base path of the Prometheus API
    #[arg(
        short = 'u',
        long = "url",
        env = "PROMETHEUS_URL",
        default_value = "http://127.0.0.1:9090"
    )]
    pub url: String,

    /// Skip TLS certificate verification (not recommended!)
    #[arg(short = 'i', long, env = "PROMETHEUS_SKIP_VERIFY")]
    pub insecure_skip_verify: bool,

    /// TLS CA certificate bundle in PEM format
    #[arg(short = 'T', long, env = "PROMETHEUS_CACERT")]
    pub trusted_ca_file: Option<PathBuf>,

    /// Seconds to wait for a response from the host
    #[arg(short = 't', long, env = "PROMETHEUS_TIMEOUT", default_value_t = 15)]
    pub timeout: u64,

    /// Only look for firing alerts
    #[arg(short = 'f', long)]
    pub firing: bool,

    /// Only look for pending alerts
    #[arg(short = 'p', long)]
    pub pending: bool,

    /// Filter alerts by label using a regex, e.g. --label 'name=(Alert1|Alert2|^$)'.
    /// Can be specified more than once; a pattern matching the empty string
    /// also matches alerts lacking the label.
    #[arg(short = 'l', long = "label", value_name = "NAME=PATTERN", value_parser = parse_filter)]
    pub labels: Vec<(String, String)>,

    /// Filter alerts by annotation using a regex. Can be specified more than once.
    #[arg(short = 'a', long = "annotation", value_name = "NAME=PATTERN", value_parser = parse_filter)]
    pub annotations: Vec<(String, String)>,

    /// More verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the resolved check configuration
    pub fn into_config(self) -> CheckConfig {
        CheckConfig {
            url: self.url,
            insecure_skip_verify: self.insecure_skip_verify,
            trusted_ca_file: self.trusted_ca_file,
            timeout_secs: self.timeout,
            firing: self.firing,
            pending: self.pending,
            labels: self.labels.into_iter().collect(),
            annotations: self.annotations.into_iter().collect(),
        }
    }
}

/// Parse a NAME=PATTERN filter argument, splitting on the first '='
/// so patterns may themselves contain '='.
fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, pattern)) if !name.is_empty() => {
            Ok((name.to_string(), pattern.to_string()))
        }
        _ => Err(format!("expected NAME=PATTERN, got '{s}'")),
    }
}
