//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods applied after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Missing credentials are NOT a build error; the token provider reports them.

use std::time::Duration;
use tracing::debug;
use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};
use crate::types::{ClientCredentials, Config, ConnectionConfig, TargetConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    bc_tenant: Option<String>,
    environment: Option<String>,
    timeout: Option<Duration>,
    auth_base_url: Option<String>,
    api_base_url: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `BC_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the directory (tenant) ID.
    pub fn with_tenant_id(mut self, tenant_id: String) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    /// Set the client ID.
    pub fn with_client_id(mut self, client_id: String) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Set the client secret.
    pub fn with_client_secret(mut self, secret: String) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Set the Business Central tenant hint (GUID or `default`).
    pub fn with_bc_tenant(mut self, bc_tenant: String) -> Self {
        self.bc_tenant = Some(bc_tenant);
        self
    }

    /// Set the environment name.
    pub fn with_environment(mut self, environment: String) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the resource GET timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the identity platform base URL.
    pub fn with_auth_base_url(mut self, url: String) -> Self {
        self.auth_base_url = Some(url);
        self
    }

    /// Override the Business Central API base URL.
    pub fn with_api_base_url(mut self, url: String) -> Self {
        self.api_base_url = Some(url);
        self
    }

    pub(crate) fn set_tenant_id(&mut self, value: Option<String>) {
        self.tenant_id = value;
    }

    pub(crate) fn set_client_id(&mut self, value: Option<String>) {
        self.client_id = value;
    }

    pub(crate) fn set_client_secret(&mut self, value: Option<String>) {
        self.client_secret = value;
    }

    pub(crate) fn set_bc_tenant(&mut self, value: Option<String>) {
        self.bc_tenant = value;
    }

    pub(crate) fn set_environment(&mut self, value: Option<String>) {
        self.environment = value;
    }

    pub(crate) fn set_timeout(&mut self, value: Option<Duration>) {
        self.timeout = value;
    }

    pub(crate) fn set_auth_base_url(&mut self, value: Option<String>) {
        self.auth_base_url = value;
    }

    pub(crate) fn set_api_base_url(&mut self, value: Option<String>) {
        self.api_base_url = value;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is outside 5-60 seconds.
    /// Returns [`ConfigError::InvalidBaseUrl`] if a base URL is not an absolute http(s) URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let auth_base_url = validate_and_normalize_base_url(
            "auth_base_url",
            self.auth_base_url.as_deref().unwrap_or(DEFAULT_AUTH_BASE_URL),
        )?;
        let api_base_url = validate_and_normalize_base_url(
            "api_base_url",
            self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL),
        )?;

        let auth = ClientCredentials::new(
            self.tenant_id.unwrap_or_default(),
            self.client_id.unwrap_or_default(),
            self.client_secret.unwrap_or_default(),
        );
        let target = TargetConfig::new(
            self.bc_tenant.unwrap_or_default(),
            self.environment.unwrap_or_default(),
        );

        Ok(Config {
            auth,
            target,
            connection: ConnectionConfig {
                auth_base_url,
                api_base_url,
                timeout,
            },
        })
    }
}

/// Checks that the resource GET timeout lies within the accepted bounds.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs < MIN_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout must be at least {} seconds (got {})",
                MIN_TIMEOUT_SECS, secs
            ),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds (got {})",
                MAX_TIMEOUT_SECS, secs
            ),
        });
    }
    Ok(())
}

/// Parse a base URL, require an http(s) scheme and strip trailing slashes.
fn validate_and_normalize_base_url(field: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        field: field.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            field: field.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            field: field.to_string(),
            message: "missing host".to_string(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
