//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `BC_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed, except the client secret which is read verbatim.
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub const ENV_TENANT_ID: &str = "BC_TENANT_ID";
pub const ENV_CLIENT_ID: &str = "BC_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "BC_CLIENT_SECRET";
pub const ENV_TARGET_TENANT: &str = "BC_TARGET_TENANT";
pub const ENV_ENVIRONMENT: &str = "BC_ENVIRONMENT";
pub const ENV_TIMEOUT: &str = "BC_TIMEOUT";
pub const ENV_AUTH_BASE_URL: &str = "BC_AUTH_BASE_URL";
pub const ENV_API_BASE_URL: &str = "BC_API_BASE_URL";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(tenant) = env_var_or_none(ENV_TENANT_ID) {
        loader.set_tenant_id(Some(tenant));
    }
    if let Some(client_id) = env_var_or_none(ENV_CLIENT_ID) {
        loader.set_client_id(Some(client_id));
    }
    // Secrets may legitimately carry surrounding whitespace.
    if let Ok(secret) = std::env::var(ENV_CLIENT_SECRET)
        && !secret.is_empty()
    {
        loader.set_client_secret(Some(secret));
    }
    if let Some(bc_tenant) = env_var_or_none(ENV_TARGET_TENANT) {
        loader.set_bc_tenant(Some(bc_tenant));
    }
    if let Some(environment) = env_var_or_none(ENV_ENVIRONMENT) {
        loader.set_environment(Some(environment));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(url) = env_var_or_none(ENV_AUTH_BASE_URL) {
        loader.set_auth_base_url(Some(url));
    }
    if let Some(url) = env_var_or_none(ENV_API_BASE_URL) {
        loader.set_api_base_url(Some(url));
    }

    Ok(())
}
