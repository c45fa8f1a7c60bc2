//! Kuberhealthy collaborator: readiness wait and result reporting.
//!
//! Kuberhealthy runs the check pod and tells it where to report through
//! `KH_REPORTING_URL` (plus `KH_RUN_UUID` to identify the run). The check
//! talks to it through two narrow traits so the run sequence can be tested
//! without a live endpoint.

mod error;
mod report;

pub use error::*;
pub use report::Report;

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// Header carrying the run identifier on every report.
pub const RUN_UUID_HEADER: &str = "kh-run-uuid";

/// Delay between reachability probes.
const READINESS_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on a single report request.
const REPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends the outcome of a check run.
#[async_trait]
pub trait CheckReporter: Send + Sync {
    /// Report that the check passed.
    async fn report_success(&self) -> Result<(), ReportError>;

    /// Report that the check failed with the given messages.
    async fn report_failure(&self, errors: Vec<String>) -> Result<(), ReportError>;
}

/// Best-effort gate run before the check itself.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Block until the orchestrator answers, or `limit` elapses.
    async fn wait_until_reachable(&self, limit: Duration) -> Result<(), ReadinessError>;
}

/// Settings for [`KuberhealthyClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KuberhealthyConfig {
    /// Endpoint receiving reports (`KH_REPORTING_URL`)
    pub reporting_url: Option<String>,
    /// Run identifier sent as the `kh-run-uuid` header (`KH_RUN_UUID`)
    pub run_uuid: Option<String>,
    /// Log every probe attempt and report payload
    pub debug: bool,
}

/// HTTP client for the Kuberhealthy reporting endpoint.
pub struct KuberhealthyClient {
    client: reqwest::Client,
    config: KuberhealthyConfig,
}

impl KuberhealthyClient {
    /// Create a client with its own HTTP connection pool.
    pub fn new(config: KuberhealthyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a client around an existing HTTP client (for testing).
    pub fn with_client(config: KuberhealthyConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    async fn send_report(&self, report: &Report) -> Result<(), ReportError> {
        let url = self
            .config
            .reporting_url
            .as_deref()
            .ok_or(ReportError::MissingReportingUrl)?;

        if self.config.debug {
            tracing::debug!(
                url,
                run_uuid = ?self.config.run_uuid,
                ok = report.ok,
                errors = ?report.errors,
                "Sending report to Kuberhealthy"
            );
        }

        let mut request = self.client.post(url).timeout(REPORT_TIMEOUT).json(report);
        if let Some(run_uuid) = &self.config.run_uuid {
            request = request.header(RUN_UUID_HEADER, run_uuid);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(
                        status = status.as_u16(),
                        error = %e,
                        "Failed to read body of rejected report response"
                    );
                    String::new()
                }
            };
            return Err(ReportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        if self.config.debug {
            tracing::debug!(status = status.as_u16(), "Kuberhealthy accepted report");
        }
        Ok(())
    }
}

#[async_trait]
impl CheckReporter for KuberhealthyClient {
    async fn report_success(&self) -> Result<(), ReportError> {
        self.send_report(&Report::success()).await
    }

    async fn report_failure(&self, errors: Vec<String>) -> Result<(), ReportError> {
        self.send_report(&Report::failure(errors)).await
    }
}

#[async_trait]
impl ReadinessProbe for KuberhealthyClient {
    async fn wait_until_reachable(&self, limit: Duration) -> Result<(), ReadinessError> {
        let url = self
            .config
            .reporting_url
            .as_deref()
            .ok_or(ReadinessError::MissingReportingUrl)?;

        let deadline = Instant::now() + limit;
        let mut last_error = "no probe completed".to_string();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            // Any HTTP answer, whatever the status, proves the endpoint is up.
            match tokio::time::timeout_at(deadline, self.client.get(url).send()).await {
                Ok(Ok(response)) => {
                    tracing::debug!(
                        attempt,
                        status = response.status().as_u16(),
                        "Kuberhealthy endpoint reachable"
                    );
                    return Ok(());
                }
                Ok(Err(e)) => {
                    if self.config.debug {
                        tracing::debug!(attempt, error = %e, "Kuberhealthy endpoint not reachable yet");
                    }
                    last_error = e.to_string();
                }
                Err(_) => break,
            }

            if Instant::now() + READINESS_POLL_INTERVAL >= deadline {
                break;
            }
            tokio::time::sleep(READINESS_POLL_INTERVAL).await;
        }

        Err(ReadinessError::DeadlineExceeded { limit, last_error })
    }
}
