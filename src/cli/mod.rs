//! CLI module for the content check
//!
//! Every setting is a flag with an environment variable fallback, so the
//! binary runs unchanged inside a Kuberhealthy check pod (environment only)
//! and from a shell (flags).
//!
//! # Example
//!
//! ```bash
//! TARGET_URL=https://example.com TARGET_STRING="Example Domain" \
//! TIMEOUT_DURATION=10s KH_REPORTING_URL=http://kuberhealthy/check \
//!     http-content-check
//! ```

use crate::config::{LogFormat, LoggingConfig};
use crate::kuberhealthy::KuberhealthyConfig;
use clap::Parser;

/// HTTP content check - verify that a URL serves an expected string
#[derive(Parser, Debug)]
#[command(
    name = "http-content-check",
    version,
    about = "Kuberhealthy check that verifies a URL's response contains a string"
)]
pub struct Cli {
    /// URL to fetch
    #[arg(long, env = "TARGET_URL")]
    pub target_url: Option<String>,

    /// Literal string that must appear in the response body
    #[arg(long, env = "TARGET_STRING")]
    pub target_string: Option<String>,

    /// Request timeout (e.g. 5s, 1m, 500ms)
    #[arg(long, env = "TIMEOUT_DURATION")]
    pub timeout_duration: Option<String>,

    /// Kuberhealthy endpoint that receives the check report
    #[arg(long, env = "KH_REPORTING_URL")]
    pub reporting_url: Option<String>,

    /// Identifier of the current check run, echoed back to Kuberhealthy
    #[arg(long, env = "KH_RUN_UUID")]
    pub run_uuid: Option<String>,

    /// Enable verbose logging of Kuberhealthy interactions
    ///
    /// Accepts the usual spellings from the environment (1/0, yes/no, on/off).
    #[arg(long, env = "KH_DEBUG", value_parser = clap::builder::BoolishValueParser::new())]
    pub debug: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format (pretty, json); unknown values fall back to pretty
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

impl Cli {
    /// Logging settings derived from the arguments.
    ///
    /// An unrecognised log format keeps the default so a bad ambient setting
    /// never prevents the check from reporting.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.parse().unwrap_or_default(),
            debug_collaborators: self.debug,
        }
    }

    /// Settings for the Kuberhealthy client.
    pub fn kuberhealthy_config(&self) -> KuberhealthyConfig {
        KuberhealthyConfig {
            reporting_url: self.reporting_url.clone().filter(|u| !u.is_empty()),
            run_uuid: self.run_uuid.clone().filter(|u| !u.is_empty()),
            debug: self.debug,
        }
    }
}
