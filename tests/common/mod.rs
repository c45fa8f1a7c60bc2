//! Shared helpers for integration tests: mock target sites and a mock
//! Kuberhealthy reporting endpoint.

#![allow(dead_code)]

use http_content_check::kuberhealthy::Report;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a target site that serves `body` on every GET.
pub async fn start_target(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

/// Start a target site that only answers after `delay`.
pub async fn start_slow_target(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("eventually")
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

/// Start a Kuberhealthy stand-in that answers reports with `report_status`.
///
/// GET requests (the readiness probe) get 405, as the real endpoint only
/// accepts POST.
pub async fn start_kuberhealthy(report_status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(report_status))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;
    server
}

/// Reports received by a Kuberhealthy stand-in, in arrival order.
pub async fn received_reports(server: &MockServer) -> Vec<Report> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == "POST")
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
