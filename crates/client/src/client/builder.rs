//! Client builder for constructing [`BcClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing base URLs (removing trailing slashes) and rejecting unparseable ones
//! - Configuring the underlying HTTP client (timeout, redirect limit)
//! - Creating the [`TokenProvider`] with its cache policy
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`BcClient`] methods in `mod.rs`)
//! - Reading environment variables (handled by `bc_config::ConfigLoader`)
//!
//! # Invariants
//! - Every option has a default, so `BcClient::builder().build()` targets the public cloud
//! - Base URLs never end with a slash once built

use std::time::Duration;

use bc_config::Config;
use bc_config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
    TOKEN_CACHE_MAX_ENTRIES, TOKEN_CACHE_TTL_SECS, TOKEN_REQUEST_TIMEOUT_SECS, TOKEN_SCOPE_SUFFIX,
};
use reqwest::Url;

use crate::auth::TokenProvider;
use crate::client::BcClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`BcClient`].
///
/// # Example
///
/// ```rust,ignore
/// use bc_client::BcClient;
/// use std::time::Duration;
///
/// let client = BcClient::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct BcClientBuilder {
    auth_base_url: String,
    api_base_url: String,
    timeout: Duration,
    max_redirects: usize,
    token_request_timeout: Duration,
    token_cache_ttl: Duration,
    token_cache_capacity: usize,
}

impl Default for BcClientBuilder {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            token_request_timeout: Duration::from_secs(TOKEN_REQUEST_TIMEOUT_SECS),
            token_cache_ttl: Duration::from_secs(TOKEN_CACHE_TTL_SECS),
            token_cache_capacity: TOKEN_CACHE_MAX_ENTRIES,
        }
    }
}

impl BcClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity platform base URL (token endpoint host).
    pub fn auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Set the Business Central API base URL. The token scope is derived from it.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the timeout for resource GET requests.
    ///
    /// Default is 20 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of redirects to follow.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set the timeout for the token exchange. Default is 30 seconds.
    pub fn token_request_timeout(mut self, timeout: Duration) -> Self {
        self.token_request_timeout = timeout;
        self
    }

    /// Set how long token results are memoized and how many credential
    /// triples are kept.
    pub fn token_cache_policy(mut self, ttl: Duration, capacity: usize) -> Self {
        self.token_cache_ttl = ttl;
        self.token_cache_capacity = capacity;
        self
    }

    /// Take base URLs and timeout from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.auth_base_url = config.connection.auth_base_url.clone();
        self.api_base_url = config.connection.api_base_url.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.businesscentral.dynamics.com/"` -> `"https://api.businesscentral.dynamics.com"`
    /// - `"http://localhost:8080//"` -> `"http://localhost:8080"`
    fn normalize_base_url(field: &str, url: &str) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(format!("{field}: {e}")))?;
        Ok(trimmed.to_string())
    }

    /// Build the [`BcClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if a base URL does not parse.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<BcClient> {
        let auth_base_url = Self::normalize_base_url("auth_base_url", &self.auth_base_url)?;
        let api_base_url = Self::normalize_base_url("api_base_url", &self.api_base_url)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .build()?;

        let scope = format!("{api_base_url}{TOKEN_SCOPE_SUFFIX}");
        let tokens = TokenProvider::new(http.clone(), auth_base_url, scope)
            .with_request_timeout(self.token_request_timeout)
            .with_cache_policy(self.token_cache_ttl, self.token_cache_capacity);

        Ok(BcClient {
            http,
            api_base_url,
            timeout: self.timeout,
            tokens,
        })
    }
}
