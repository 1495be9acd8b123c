//! Shared test utilities for bc-inspector integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point both base URLs at a mock server and supply complete credentials.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - No `BC_*` variable leaks in from the host environment.

#![allow(dead_code)]

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TENANT: &str = "contoso-tenant";
pub const TOKEN: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.test-payload.test-signature";

const BC_VARS: &[&str] = &[
    "BC_TENANT_ID",
    "BC_CLIENT_ID",
    "BC_CLIENT_SECRET",
    "BC_TARGET_TENANT",
    "BC_ENVIRONMENT",
    "BC_TIMEOUT",
    "BC_AUTH_BASE_URL",
    "BC_API_BASE_URL",
];

/// Returns a hermetic `bc-inspector` command with no configuration.
pub fn bc_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bc-inspector");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in BC_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command with complete credentials and both base URLs
/// pointing at `base_url`.
pub fn bc_cmd_with_server(base_url: &str) -> Command {
    let mut cmd = bc_cmd();
    cmd.env("BC_TENANT_ID", TENANT)
        .env("BC_CLIENT_ID", "my-client")
        .env("BC_CLIENT_SECRET", "my-secret")
        .env("BC_AUTH_BASE_URL", base_url)
        .env("BC_API_BASE_URL", base_url);
    cmd
}

/// Mount a successful token endpoint for [`TENANT`].
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/{TENANT}/oauth2/v2.0/token")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "access_token": TOKEN
        })))
        .mount(server)
        .await;
}

/// URI of a local port with no listener.
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
