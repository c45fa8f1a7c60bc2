//! The content check run.
//!
//! A run is strictly sequential: load config, wait for Kuberhealthy (best
//! effort), fetch the target, search the body, report. The first failing step
//! short-circuits to a failure report. Only a failed report escapes
//! [`ContentCheck::run`]; deciding what that means for the process is left to
//! the caller.

mod error;
mod fetch;
mod matcher;


pub use error::*;
pub use fetch::fetch_content;
pub use matcher::find_string_in_content;

use crate::config::{CheckConfig, ConfigError};
use crate::kuberhealthy::{CheckReporter, ReadinessProbe, ReportError};
use std::sync::Arc;
use std::time::Duration;

/// Ceiling on the wait for Kuberhealthy before the check starts.
pub const READINESS_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Result of a run whose report was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Target string found and success reported
    Passed,
    /// Failure reported with this message
    Failed(String),
}

/// Runs one content check against its collaborators.
pub struct ContentCheck {
    probe: Arc<dyn ReadinessProbe>,
    reporter: Arc<dyn CheckReporter>,
    readiness_limit: Duration,
}

impl ContentCheck {
    pub fn new(probe: Arc<dyn ReadinessProbe>, reporter: Arc<dyn CheckReporter>) -> Self {
        Self {
            probe,
            reporter,
            readiness_limit: READINESS_TIME_LIMIT,
        }
    }

    /// Override the readiness ceiling (for testing).
    pub fn with_readiness_limit(mut self, limit: Duration) -> Self {
        self.readiness_limit = limit;
        self
    }

    /// Execute the check and report its outcome.
    ///
    /// `config` is the result of loading configuration; a load error is
    /// reported like any other check failure.
    pub async fn run(
        &self,
        config: Result<CheckConfig, ConfigError>,
    ) -> Result<CheckOutcome, ReportError> {
        match self.evaluate(config).await {
            Ok(config) => {
                tracing::info!(
                    target_string = %config.target_string,
                    target_url = %config.target_url,
                    "Success! Found target string"
                );
                self.reporter.report_success().await?;
                tracing::info!("Successfully reported to Kuberhealthy");
                Ok(CheckOutcome::Passed)
            }
            Err(e) => {
                tracing::error!(stage = e.stage(), error = %e, "Content check failed");
                let message = e.to_string();
                self.reporter.report_failure(vec![message.clone()]).await?;
                tracing::info!("Reported failure to Kuberhealthy");
                Ok(CheckOutcome::Failed(message))
            }
        }
    }

    async fn evaluate(
        &self,
        config: Result<CheckConfig, ConfigError>,
    ) -> Result<CheckConfig, CheckError> {
        let config = config?;

        // Best effort: a failed wait is logged and the check goes on.
        if let Err(e) = self.probe.wait_until_reachable(self.readiness_limit).await {
            tracing::error!(
                error = %e,
                "Error waiting for kuberhealthy endpoint to be contactable by checker pod"
            );
        }

        tracing::info!(target_url = %config.target_url, "Attempting to fetch content");
        let content = fetch_content(&config.target_url, config.timeout).await?;
        tracing::debug!(bytes = content.len(), "Fetched content");

        tracing::info!(target_string = %config.target_string, "Parsing content for string");
        if !find_string_in_content(&content, &config.target_string) {
            return Err(CheckError::ContentNotFound);
        }

        Ok(config)
    }
}
