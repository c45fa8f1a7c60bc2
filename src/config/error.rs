//! Configuration error types

use thiserror::Error;

/// Configuration-related errors
///
/// The display text of each variant is what gets reported to Kuberhealthy,
/// so it is phrased for the person reading the check status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no URL provided in YAML")]
    MissingUrl,

    #[error("no string provided in YAML")]
    MissingString,

    #[error("failed to parse TIMEOUT_DURATION: {reason}")]
    InvalidTimeout { value: String, reason: String },
}
