//! Integration tests for structured exit codes.
//!
//! These tests verify that bc-inspector returns the correct exit codes
//! for different failure modes, enabling reliable shell scripting.

mod common;

use common::*;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that successful commands return exit code 0.
#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    bc_cmd_with_server(&server.uri())
        .arg("token")
        .assert()
        .code(0);
}

/// Test that a rejected token request returns exit code 2 with status and body.
#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_client"}"#))
        .mount(&server)
        .await;

    bc_cmd_with_server(&server.uri())
        .arg("token")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#"Token error 401: {"error":"invalid_client"}"#));
}

/// Test that an unreachable identity platform returns exit code 3.
#[test]
fn test_connection_refused_returns_exit_code_3() {
    bc_cmd_with_server(&closed_port_uri())
        .arg("token")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Token exception: "));
}

/// Test that exhausting every candidate returns exit code 4.
#[tokio::test]
async fn test_nothing_found_returns_exit_code_4() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    bc_cmd_with_server(&server.uri())
        .args(["--environment", "Production", "companies"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No endpoint returned companies"));
}

/// Test that missing credentials return exit code 5 without any request.
#[tokio::test]
async fn test_missing_credentials_returns_exit_code_5() {
    let server = MockServer::start().await;

    bc_cmd()
        .env("BC_AUTH_BASE_URL", server.uri())
        .env("BC_TENANT_ID", TENANT)
        .arg("token")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Missing tenant/client/secret."));

    assert!(server.received_requests().await.unwrap().is_empty());
}

/// Test that a missing environment returns exit code 5.
#[tokio::test]
async fn test_missing_environment_returns_exit_code_5() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    bc_cmd_with_server(&server.uri())
        .arg("companies")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("environment"));
}

/// Test that an out-of-range timeout returns exit code 5.
#[test]
fn test_timeout_out_of_range_returns_exit_code_5() {
    bc_cmd()
        .args(["--timeout", "90", "config"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("timeout"));
}

/// Test that a malformed BC_TIMEOUT returns exit code 5.
#[test]
fn test_invalid_timeout_env_returns_exit_code_5() {
    bc_cmd()
        .env("BC_TIMEOUT", "soon")
        .arg("config")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("BC_TIMEOUT"));
}

/// Test that an invalid base URL returns exit code 5.
#[test]
fn test_invalid_base_url_returns_exit_code_5() {
    bc_cmd()
        .args(["--api-base-url", "ftp://example.com", "config"])
        .assert()
        .code(5);
}
