//! http-content-check - Kuberhealthy external check for page content
//!
//! Fetches a URL within a timeout, verifies that a literal string appears in
//! the response body, and reports the outcome to Kuberhealthy.

pub mod check;
pub mod cli;
pub mod config;
pub mod kuberhealthy;
pub mod logging;
