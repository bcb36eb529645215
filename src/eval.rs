//! Alert evaluation: the decision core of the check

use crate::alert::Alert;
use crate::filter::FilterSet;

/// State-selection flags for the evaluator.
///
/// The orchestrator rejects both flags being set before evaluation runs;
/// if the evaluator is invoked with both anyway, the state gate excludes
/// every alert (no state equals both "firing" and "pending").
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalConfig {
    /// Only consider alerts in the firing state
    pub only_firing: bool,
    /// Only consider alerts in the pending state
    pub only_pending: bool,
}

/// Select the alerts that should make the check fail.
///
/// Each alert passes through three gates in order: state, labels,
/// annotations. A gate failure excludes the alert and skips the remaining
/// gates. Filtering is order-preserving and does not deduplicate; empty
/// filter sets satisfy their gate vacuously. Pure function, no I/O.
pub fn evaluate(
    alerts: Vec<Alert>,
    label_filters: &FilterSet,
    annotation_filters: &FilterSet,
    config: &EvalConfig,
) -> Vec<Alert> {
    alerts
        .into_iter()
        .filter(|alert| {
            if (config.only_firing && !alert.is_firing())
                || (config.only_pending && !alert.is_pending())
            {
                tracing::debug!(state = %alert.state, "Alert ignored due to state");
                return false;
            }

            if let Some(name) = label_filters.unmatched(&alert.labels) {
                tracing::debug!(label = %name, "Alert ignored due to label");
                return false;
            }

            if let Some(name) = annotation_filters.unmatched(&alert.annotations) {
                tracing::debug!(annotation = %name, "Alert ignored due to annotation");
                return false;
            }

            true
        })
        .collect()
}
