//! Alert data model and wire envelope

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Alert state reported as firing by the backend
pub const STATE_FIRING: &str = "firing";
/// Alert state reported as pending by the backend
pub const STATE_PENDING: &str = "pending";

/// One active alert as reported by the alerts endpoint.
///
/// Alerts are read-only once decoded: they are filtered and optionally
/// serialized back out for the report, never mutated. `state` carries the
/// backend's value verbatim; states other than firing/pending pass through
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Lifecycle state ("firing", "pending", ...)
    #[serde(default)]
    pub state: String,
    /// When the alert became active (opaque timestamp string)
    #[serde(rename = "activeAt", default)]
    pub active_at: String,
    /// Current value of the alerting expression (opaque)
    #[serde(default)]
    pub value: String,
    /// Identity/routing labels
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Free-form context annotations
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Alert {
    /// Whether the alert is in the firing state
    pub fn is_firing(&self) -> bool {
        self.state == STATE_FIRING
    }

    /// Whether the alert is in the pending state
    pub fn is_pending(&self) -> bool {
        self.state == STATE_PENDING
    }
}

/// Top-level response of the alerts listing endpoint:
/// `{"status": ..., "data": {"alerts": [...]}}`
#[derive(Debug, Deserialize)]
pub struct AlertsEnvelope {
    pub status: String,
    pub data: AlertsData,
}

/// Nested payload carrying the alert list
#[derive(Debug, Deserialize)]
pub struct AlertsData {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}
