//! Common test utilities for integration tests.
//!
//! Shared helpers for building a [`BcClient`] pointed at a wiremock server
//! and for mounting the token endpoint.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Both base URLs of a test client point at the same mock server
//!
//! # What this does NOT handle
//! - Resource endpoint mocks (mounted by each test)

#[allow(unused_imports)]
pub use bc_client::testing::load_fixture;

#[allow(unused_imports)]
pub use bc_client::{BcClient, endpoints};
#[allow(unused_imports)]
pub use bc_config::{ClientCredentials, TargetConfig};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{method, path};

/// Tenant used by [`credentials`].
#[allow(dead_code)]
pub const TENANT: &str = "contoso-tenant";

/// Access token served by the token fixture.
#[allow(dead_code)]
pub const FIXTURE_TOKEN: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.test-payload.test-signature";

/// A complete credential triple for [`TENANT`].
#[allow(dead_code)]
pub fn credentials() -> ClientCredentials {
    ClientCredentials::new(TENANT, "my-client", "my-secret")
}

/// Client whose identity and API base URLs both point at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> BcClient {
    BcClient::builder()
        .auth_base_url(server.uri())
        .api_base_url(server.uri())
        .build()
        .expect("test client should build")
}

/// URI of a local port with no listener, so connections are refused.
#[allow(dead_code)]
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Mount the token endpoint for [`TENANT`] answering with the success fixture.
#[allow(dead_code)]
pub async fn mount_token_success(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/{TENANT}/oauth2/v2.0/token")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("token/token_success.json")),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}
