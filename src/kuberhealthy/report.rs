//! Wire format of a check report.

use serde::{Deserialize, Serialize};

/// Body POSTed to the Kuberhealthy reporting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Errors")]
    pub errors: Vec<String>,
    #[serde(rename = "OK")]
    pub ok: bool,
}

impl Report {
    pub fn success() -> Self {
        Self {
            errors: Vec::new(),
            ok: true,
        }
    }

    pub fn failure(errors: Vec<String>) -> Self {
        Self { errors, ok: false }
    }
}
