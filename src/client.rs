//! HTTP client for the alerts listing endpoint

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::alert::{Alert, AlertsEnvelope};

/// Sub-path of the backend's query API that lists active alerts
const ALERTS_PATH: &str = "/api/v1/alerts";

/// Connection and trust settings for the single fetch.
#[derive(Debug, Clone)]
pub struct TransportPolicy {
    /// How long to wait for the response before giving up
    pub timeout: Duration,
    /// Skip TLS peer verification (not recommended)
    pub insecure_skip_verify: bool,
    /// Optional PEM CA bundle to trust instead of system defaults
    pub trusted_ca_file: Option<PathBuf>,
}

impl Default for TransportPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            insecure_skip_verify: false,
            trusted_ca_file: None,
        }
    }
}

/// One-shot client for fetching the current alert set.
#[derive(Debug, Clone)]
pub struct AlertClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl AlertClient {
    /// Build a client for the given base URL under the given policy.
    ///
    /// TLS settings (peer verification, trust bundle) only apply when the
    /// endpoint scheme requires transport security; for plain HTTP the
    /// bundle file is never read.
    pub fn new(base_url: &Url, policy: &TransportPolicy) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().timeout(policy.timeout);

        if base_url.scheme() == "https" {
            builder = builder.danger_accept_invalid_certs(policy.insecure_skip_verify);

            if let Some(path) = &policy.trusted_ca_file {
                let pem = std::fs::read(path).map_err(|e| {
                    ClientError::Transport(format!(
                        "unable to read CA bundle {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| {
                    ClientError::Transport(format!(
                        "unable to parse CA bundle {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                for cert in certs {
                    builder = builder.add_root_certificate(cert);
                }
            }
        }

        let http_client = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: alerts_endpoint(base_url),
        })
    }

    /// Fetch the current alert set: one GET, one attempt, no retry.
    pub async fn fetch_alerts(&self) -> Result<Vec<Alert>, ClientError> {
        tracing::info!(url = %self.endpoint, "Executing request GET");

        let response = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Transport(format!(
                "backend returned status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let envelope: AlertsEnvelope =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

        tracing::debug!(
            status = %envelope.status,
            count = envelope.data.alerts.len(),
            "Decoded alerts response"
        );

        Ok(envelope.data.alerts)
    }
}

/// Join the well-known alerts path onto the base URL.
///
/// Trailing slashes are trimmed first so sub-path bases survive intact
/// (plain string concatenation would produce `//` and URL join semantics
/// would drop the sub-path).
fn alerts_endpoint(base_url: &Url) -> String {
    format!("{}{}", base_url.as_str().trim_end_matches('/'), ALERTS_PATH)
}

/// Alert fetch errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode alerts response: {0}")]
    Decode(String),
}
