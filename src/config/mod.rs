//! Configuration module for the content check
//!
//! Turns the raw settings collected by the CLI layer (flags with environment
//! fallbacks) into a validated [`CheckConfig`].
//!
//! # Settings
//!
//! - `TARGET_URL` - URL to fetch (required, non-empty)
//! - `TARGET_STRING` - literal to look for in the body (required, non-empty)
//! - `TIMEOUT_DURATION` - request timeout such as `5s` or `1m` (required, positive)
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use http_content_check::cli::Cli;
//! use http_content_check::config::CheckConfig;
//! use std::time::Duration;
//!
//! let cli = Cli::try_parse_from([
//!     "http-content-check",
//!     "--target-url", "http://example.com",
//!     "--target-string", "Example",
//!     "--timeout-duration", "5s",
//! ]).unwrap();
//! let config = CheckConfig::load(&cli).unwrap();
//! assert_eq!(config.timeout, Duration::from_secs(5));
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use crate::cli::Cli;
use std::time::Duration;

/// Validated settings for a single content check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// URL to request
    pub target_url: String,
    /// Literal that must appear in the response body
    pub target_string: String,
    /// Total timeout for the request
    pub timeout: Duration,
}

impl CheckConfig {
    /// Build the check configuration from parsed CLI arguments.
    ///
    /// Fields are validated in order (URL, string, timeout) and the first
    /// problem is returned. No default timeout is substituted.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let target_url = non_empty(cli.target_url.as_deref()).ok_or(ConfigError::MissingUrl)?;
        let target_string =
            non_empty(cli.target_string.as_deref()).ok_or(ConfigError::MissingString)?;
        let timeout = parse_timeout(cli.timeout_duration.as_deref().unwrap_or_default())?;

        Ok(Self {
            target_url: target_url.to_string(),
            target_string: target_string.to_string(),
            timeout,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse a duration string such as `5s`, `250ms` or `1h30m`.
///
/// Zero durations are rejected: a request with no time budget can never pass.
pub fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidTimeout {
        value: value.to_string(),
        reason,
    };

    if value.trim().is_empty() {
        return Err(invalid("value is empty".to_string()));
    }

    let timeout = humantime::parse_duration(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if timeout.is_zero() {
        return Err(invalid("duration must be positive".to_string()));
    }

    Ok(timeout)
}
