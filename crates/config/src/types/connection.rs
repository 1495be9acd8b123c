//! Connection and target configuration types.
//!
//! Responsibilities:
//! - Define connection settings (identity base URL, API base URL, resource GET timeout).
//! - Define the Business Central target (tenant hint, environment name).
//! - Define the main `Config` structure combining credentials, target and connection.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - Base URLs never carry a trailing slash once built by `ConfigLoader`.

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::ClientCredentials;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Endpoint and timeout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Identity platform base URL (e.g., https://login.microsoftonline.com)
    pub auth_base_url: String,
    /// Business Central API base URL, also the token resource
    pub api_base_url: String,
    /// Timeout for resource GET requests (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The Business Central tenant and environment to inspect.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    /// Tenant segment used in API URLs: a GUID or `default`.
    /// Empty means "same as the directory tenant".
    pub bc_tenant: String,
    /// Environment name, e.g. `Production` or `Sandbox`.
    pub environment: String,
}

impl TargetConfig {
    pub fn new(bc_tenant: impl AsRef<str>, environment: impl AsRef<str>) -> Self {
        Self {
            bc_tenant: bc_tenant.as_ref().trim().to_string(),
            environment: environment.as_ref().trim().to_string(),
        }
    }

    /// Tenant segment for API URLs, falling back to the directory tenant.
    pub fn resolved_tenant<'a>(&'a self, directory_tenant: &'a str) -> &'a str {
        if self.bc_tenant.is_empty() {
            directory_tenant
        } else {
            &self.bc_tenant
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Client-credentials grant inputs
    pub auth: ClientCredentials,
    /// Business Central target
    pub target: TargetConfig,
    /// Endpoints and timeouts
    pub connection: ConnectionConfig,
}
