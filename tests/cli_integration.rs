//! End-to-end tests for the binary using assert_cmd.
//!
//! Mock servers run on the test's tokio runtime; the binary is driven from a
//! blocking task so the servers keep answering.

mod common;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use common::{received_reports, start_kuberhealthy, start_target};
use http_content_check::kuberhealthy::Report;
use predicates::prelude::*;

/// Get the check binary with a clean environment for its own settings.
fn check_cmd() -> Command {
    let mut cmd = Command::cargo_bin("http-content-check").unwrap();
    for var in [
        "TARGET_URL",
        "TARGET_STRING",
        "TIMEOUT_DURATION",
        "KH_REPORTING_URL",
        "KH_RUN_UUID",
        "KH_DEBUG",
        "LOG_LEVEL",
        "LOG_FORMAT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

async fn run_blocking(mut cmd: Command) -> assert_cmd::assert::Assert {
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();
    output.assert()
}

#[test]
fn test_version_output() {
    check_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("http-content-check"));
}

#[test]
fn test_help_lists_settings() {
    check_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TARGET_URL"))
        .stdout(predicate::str::contains("TARGET_STRING"))
        .stdout(predicate::str::contains("TIMEOUT_DURATION"))
        .stdout(predicate::str::contains("KH_REPORTING_URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_passing_check_exits_zero() {
    let target = start_target("hello world").await;
    let kuberhealthy = start_kuberhealthy(200).await;

    let mut cmd = check_cmd();
    cmd.env("TARGET_URL", target.uri())
        .env("TARGET_STRING", "world")
        .env("TIMEOUT_DURATION", "5s")
        .env("KH_REPORTING_URL", kuberhealthy.uri())
        .env("KH_RUN_UUID", "run-42");

    run_blocking(cmd).await.success();
    assert_eq!(received_reports(&kuberhealthy).await, vec![Report::success()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failing_check_still_exits_zero() {
    let target = start_target("hello world").await;
    let kuberhealthy = start_kuberhealthy(200).await;

    let mut cmd = check_cmd();
    cmd.env("TARGET_URL", target.uri())
        .env("TARGET_STRING", "xyz")
        .env("TIMEOUT_DURATION", "5s")
        .env("KH_REPORTING_URL", kuberhealthy.uri())
        .args(["--log-format", "json"]);

    run_blocking(cmd).await.success();
    assert_eq!(
        received_reports(&kuberhealthy).await,
        vec![Report::failure(vec![
            "could not find string in content".to_string()
        ])]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_url_exits_zero_after_report() {
    let kuberhealthy = start_kuberhealthy(200).await;

    let mut cmd = check_cmd();
    cmd.env("TARGET_STRING", "world")
        .env("TIMEOUT_DURATION", "5s")
        .env("KH_REPORTING_URL", kuberhealthy.uri());

    run_blocking(cmd).await.success();
    assert_eq!(
        received_reports(&kuberhealthy).await,
        vec![Report::failure(vec!["no URL provided in YAML".to_string()])]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_report_exits_non_zero() {
    let target = start_target("hello world").await;
    let kuberhealthy = start_kuberhealthy(500).await;

    let mut cmd = check_cmd();
    cmd.env("TARGET_URL", target.uri())
        .env("TARGET_STRING", "world")
        .env("TIMEOUT_DURATION", "5s")
        .env("KH_REPORTING_URL", kuberhealthy.uri());

    run_blocking(cmd).await.failure().code(1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_loose_ambient_settings_still_report() {
    let kuberhealthy = start_kuberhealthy(200).await;

    let mut cmd = check_cmd();
    cmd.env("TARGET_STRING", "world")
        .env("TIMEOUT_DURATION", "1s")
        .env("KH_REPORTING_URL", kuberhealthy.uri())
        .env("KH_DEBUG", "1")
        .env("LOG_FORMAT", "xml")
        .env("LOG_LEVEL", "info,http_content_check=loud");

    run_blocking(cmd).await.success();
    assert_eq!(
        received_reports(&kuberhealthy).await,
        vec![Report::failure(vec!["no URL provided in YAML".to_string()])]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_debug_word_value_accepted() {
    let target = start_target("hello world").await;
    let kuberhealthy = start_kuberhealthy(200).await;

    let mut cmd = check_cmd();
    cmd.env("TARGET_URL", target.uri())
        .env("TARGET_STRING", "world")
        .env("TIMEOUT_DURATION", "5s")
        .env("KH_REPORTING_URL", kuberhealthy.uri())
        .env("KH_DEBUG", "yes");

    run_blocking(cmd).await.success();
    assert_eq!(received_reports(&kuberhealthy).await, vec![Report::success()]);
}
