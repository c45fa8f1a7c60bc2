//! Error types for the content check.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors from fetching the target URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be completed (connect failure, timeout, bad URL)
    #[error("failed to fetch url {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    /// Response started but the body could not be read in full
    #[error("failed to read response body from {url}: {source}")]
    ReadBody { url: String, source: reqwest::Error },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } | FetchError::ReadBody { source, .. } => {
                source.is_timeout()
            }
        }
    }
}

/// Any reason a check run ends in a failure report.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not find string in content")]
    ContentNotFound,
}

impl CheckError {
    /// Name of the step that produced the error, used as a log field.
    pub fn stage(&self) -> &'static str {
        match self {
            CheckError::Config(_) => "load_config",
            CheckError::Fetch(_) => "fetch_content",
            CheckError::ContentNotFound => "match_content",
        }
    }
}
