//! Tracing setup for the check binary
//!
//! Builds the `EnvFilter` directives from [`LoggingConfig`] and installs a
//! pretty or JSON formatter. `RUST_LOG` takes precedence when set.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Module path of the Kuberhealthy client, raised to debug by `--debug`.
const COLLABORATOR_TARGET: &str = "http_content_check::kuberhealthy";

/// Build filter directives string from LoggingConfig
///
/// # Examples
///
/// ```
/// use http_content_check::config::{LogFormat, LoggingConfig};
/// use http_content_check::logging::build_filter_directives;
///
/// let config = LoggingConfig {
///     level: "warn".to_string(),
///     format: LogFormat::Pretty,
///     debug_collaborators: true,
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "warn,http_content_check::kuberhealthy=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if config.debug_collaborators {
        filter_str.push_str(&format!(",{}=debug", COLLABORATOR_TARGET));
    }

    filter_str
}

/// Initialize tracing based on configuration
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = build_filter_directives(config);

    // Malformed levels fall back to the default level.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&filter_str))
        .unwrap_or_else(|_| {
            let fallback = LoggingConfig {
                debug_collaborators: config.debug_collaborators,
                ..Default::default()
            };
            EnvFilter::new(build_filter_directives(&fallback))
        });

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}
