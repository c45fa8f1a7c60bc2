//! Error types for Kuberhealthy interactions.

use std::time::Duration;
use thiserror::Error;

/// Errors from sending a check report. Any of these is fatal to the run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// `KH_REPORTING_URL` was not provided
    #[error("KH_REPORTING_URL is not set")]
    MissingReportingUrl,

    /// The report request could not be delivered
    #[error("failed to send report: {0}")]
    Transport(#[from] reqwest::Error),

    /// Kuberhealthy answered with a non-success status
    #[error("report rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Errors from waiting for Kuberhealthy to become reachable.
#[derive(Debug, Clone, Error)]
pub enum ReadinessError {
    /// `KH_REPORTING_URL` was not provided
    #[error("KH_REPORTING_URL is not set")]
    MissingReportingUrl,

    /// Kuberhealthy did not answer before the limit elapsed
    #[error("kuberhealthy not reachable within {limit:?}: {last_error}")]
    DeadlineExceeded { limit: Duration, last_error: String },
}
