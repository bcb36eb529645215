//! Check orchestration: configuration, verdicts, and the fetch→filter pipeline

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::alert::Alert;
use crate::client::{AlertClient, ClientError, TransportPolicy};
use crate::eval::{evaluate, EvalConfig};
use crate::filter::{FilterError, FilterSet};

/// Resolved check configuration, constructed once by the CLI layer and
/// passed into the core. No process-wide mutable state.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Base URL of the alerting backend's query API
    pub url: String,
    /// Skip TLS peer verification
    pub insecure_skip_verify: bool,
    /// Optional PEM CA bundle to trust
    pub trusted_ca_file: Option<PathBuf>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Only report firing alerts
    pub firing: bool,
    /// Only report pending alerts
    pub pending: bool,
    /// Label name → regex pattern criteria
    pub labels: HashMap<String, String>,
    /// Annotation name → regex pattern criteria
    pub annotations: HashMap<String, String>,
}

impl CheckConfig {
    /// Validate the configuration before any I/O.
    ///
    /// Returns the parsed base URL on success.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        let base_url = Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.url.clone(),
            source: e,
        })?;

        if self.firing && self.pending {
            return Err(ConfigError::ConflictingStateFlags);
        }

        Ok(base_url)
    }

    fn transport_policy(&self) -> TransportPolicy {
        TransportPolicy {
            timeout: Duration::from_secs(self.timeout_secs),
            insecure_skip_verify: self.insecure_skip_verify,
            trusted_ca_file: self.trusted_ca_file.clone(),
        }
    }

    fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            only_firing: self.firing,
            only_pending: self.pending,
        }
    }
}

/// Check verdict consumed by the monitoring scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No matching alerts, everything succeeded
    Ok,
    /// Configuration-level problem, detected before any network call
    Warning,
    /// Matching alerts found, or an operational failure
    Critical,
}

impl Status {
    /// Exit code under the scheduler contract (0/1/2)
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
        }
    }
}

/// Run one check invocation: validate, compile filters, fetch, evaluate.
///
/// Stateless and non-retrying; the first error aborts the run. Returns the
/// matched alerts; the caller renders the verdict (non-empty → critical).
pub async fn run_check(config: &CheckConfig) -> Result<Vec<Alert>, CheckError> {
    let base_url = config.validate()?;

    let label_filters = FilterSet::compile(&config.labels)?;
    let annotation_filters = FilterSet::compile(&config.annotations)?;

    let client = AlertClient::new(&base_url, &config.transport_policy())?;

    tracing::info!("Fetching alerts...");
    let alerts = client.fetch_alerts().await?;
    tracing::debug!(count = alerts.len(), "Fetched alerts");

    Ok(evaluate(
        alerts,
        &label_filters,
        &annotation_filters,
        &config.eval_config(),
    ))
}

/// Render matched alerts as an indented JSON array for the report.
pub fn render_report(matched: &[Alert]) -> Result<String, CheckError> {
    serde_json::to_string_pretty(matched).map_err(|e| CheckError::Report(e.to_string()))
}

/// Configuration errors, detected before any I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a backend URL is required")]
    MissingUrl,

    #[error("failed to parse backend URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("--pending and --firing cannot be specified at the same time")]
    ConflictingStateFlags,
}

/// Anything that can abort a check invocation
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unable to compile filters: {0}")]
    Filter(#[from] FilterError),

    #[error("unable to fetch alerts: {0}")]
    Client(#[from] ClientError),

    #[error("unable to serialize report: {0}")]
    Report(String),
}

impl CheckError {
    /// Verdict severity for this error kind: configuration problems are
    /// warnings, everything else is critical.
    pub fn status(&self) -> Status {
        match self {
            CheckError::Config(_) => Status::Warning,
            CheckError::Filter(_) | CheckError::Client(_) | CheckError::Report(_) => {
                Status::Critical
            }
        }
    }
}
