//! Basic builder tests for the configuration loader.
//!
//! Responsibilities:
//! - Test defaults applied when nothing is configured.
//! - Test builder setters and input normalization.

use secrecy::ExposeSecret;
use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;

#[test]
fn test_build_with_no_input_uses_defaults() {
    let config = ConfigLoader::new().build().unwrap();

    assert_eq!(config.connection.auth_base_url, DEFAULT_AUTH_BASE_URL);
    assert_eq!(config.connection.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    // Missing credentials are not a configuration error.
    assert!(!config.auth.is_complete());
    assert!(config.target.environment.is_empty());
}

#[test]
fn test_builder_methods_set_values() {
    let config = ConfigLoader::new()
        .with_tenant_id(" 11111111-2222-3333-4444-555555555555 ".to_string())
        .with_client_id("client-id".to_string())
        .with_client_secret("s3cret".to_string())
        .with_bc_tenant("default".to_string())
        .with_environment(" Sandbox ".to_string())
        .with_timeout(Duration::from_secs(45))
        .build()
        .unwrap();

    assert_eq!(
        config.auth.tenant_id,
        "11111111-2222-3333-4444-555555555555"
    );
    assert_eq!(config.auth.client_id, "client-id");
    assert_eq!(config.auth.client_secret.expose_secret(), "s3cret");
    assert_eq!(config.target.bc_tenant, "default");
    assert_eq!(config.target.environment, "Sandbox");
    assert_eq!(config.connection.timeout, Duration::from_secs(45));
}

#[test]
fn test_base_urls_are_normalized() {
    let config = ConfigLoader::new()
        .with_auth_base_url("http://127.0.0.1:9000/".to_string())
        .with_api_base_url("http://127.0.0.1:9001//".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.auth_base_url, "http://127.0.0.1:9000");
    assert_eq!(config.connection.api_base_url, "http://127.0.0.1:9001");
}
