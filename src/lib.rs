//! prom-alert-check: a monitoring check for active Prometheus alerts
//!
//! Queries the alerts listing endpoint of a Prometheus server, filters the
//! active alerts against operator-supplied criteria, and produces a
//! pass/warning/fail verdict for a monitoring scheduler.
//!
//! Each invocation is stateless: one fetch, one filter pass, one verdict.
//! The decision core is split into three pieces:
//!
//! - [`filter`]: compiles name→regex criteria into reusable matchers
//! - [`client`]: the one-shot fetch of the current alert set
//! - [`eval`]: the pure state/label/annotation gate pipeline
//!
//! [`check`] wires them together and maps error kinds to verdicts.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use prom_alert_check::check::{run_check, CheckConfig};
//!
//! # async fn example() {
//! let config = CheckConfig {
//!     url: "http://127.0.0.1:9090".to_string(),
//!     insecure_skip_verify: false,
//!     trusted_ca_file: None,
//!     timeout_secs: 15,
//!     firing: true,
//!     pending: false,
//!     labels: HashMap::from([("severity".to_string(), "page".to_string())]),
//!     annotations: HashMap::new(),
//! };
//!
//! match run_check(&config).await {
//!     Ok(matched) if matched.is_empty() => println!("check passed"),
//!     Ok(matched) => println!("{} alerts found", matched.len()),
//!     Err(e) => eprintln!("check failed: {e}"),
//! }
//! # }
//! ```

pub mod alert;
pub mod check;
pub mod cli;
pub mod client;
pub mod eval;
pub mod filter;

// Re-export commonly used types
pub use alert::Alert;
pub use check::{run_check, CheckConfig, CheckError, ConfigError, Status};
pub use client::{AlertClient, ClientError, TransportPolicy};
pub use eval::{evaluate, EvalConfig};
pub use filter::{FilterError, FilterSet};
