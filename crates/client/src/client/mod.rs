//! Business Central client.
//!
//! [`BcClient`] owns the HTTP client, the API base URL, the resource timeout
//! and the shared [`TokenProvider`]. Its methods are thin wrappers that feed
//! those settings into the functions in [`crate::endpoints`] and
//! [`crate::probe`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`cache`]: Bounded TTL map backing the token cache
//!
//! # What this module does NOT handle:
//! - Holding user inputs between actions (see [`crate::InspectorSession`])
//! - Choosing which URLs to try (see [`crate::catalog`])

pub mod builder;
pub mod cache;

use std::time::Duration;

use bc_config::ClientCredentials;

use crate::auth::{AccessToken, TokenProvider, TokenResult};
use crate::endpoints::{self, AuthGetResponse, GetOptions};
use crate::error::Result;
use crate::probe::{self, EndpointCandidate, ProbeResult};

pub use builder::BcClientBuilder;

/// Business Central REST client.
///
/// Cloning is cheap; clones share the HTTP connection pool and token cache.
#[derive(Debug, Clone)]
pub struct BcClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) tokens: TokenProvider,
}

impl BcClient {
    /// Create a new client builder.
    pub fn builder() -> BcClientBuilder {
        BcClientBuilder::new()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn auth_base_url(&self) -> &str {
        self.tokens.auth_base_url()
    }

    /// Timeout applied to resource GET requests.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn token_provider(&self) -> &TokenProvider {
        &self.tokens
    }

    /// Get a (possibly memoized) token for the credentials.
    pub async fn token(&self, credentials: &ClientCredentials) -> TokenResult {
        self.tokens.get_token(credentials).await
    }

    /// Forget the memoized token result for the credentials.
    pub fn invalidate_token(&self, credentials: &ClientCredentials) -> bool {
        self.tokens.invalidate(credentials)
    }

    /// Authenticated GET against an absolute URL.
    pub async fn auth_get(
        &self,
        url: &str,
        token: &AccessToken,
        options: &GetOptions,
    ) -> Result<AuthGetResponse> {
        endpoints::auth_get(&self.http, url, token, options, self.timeout).await
    }

    /// Probe candidates in order; see [`probe::probe_endpoints`].
    pub async fn probe(
        &self,
        token: &AccessToken,
        candidates: &[EndpointCandidate],
    ) -> Result<Option<ProbeResult>> {
        probe::probe_endpoints(&self.http, token, candidates, self.timeout).await
    }
}
