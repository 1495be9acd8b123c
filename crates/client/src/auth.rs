//! Access tokens and the memoizing token provider.
//!
//! Responsibilities:
//! - Wrap bearer tokens so they never appear in `Debug` output.
//! - Reject incomplete credentials before any network call.
//! - Memoize exchange results (successes and failures) per credential triple
//!   in a bounded [`TtlCache`].
//!
//! Does NOT handle:
//! - The HTTP exchange itself (see [`crate::endpoints::request_token`]).
//! - Token claims or `expires_in`; freshness is governed by the cache TTL only.
//!
//! Invariants:
//! - Clones of a [`TokenProvider`] share one cache.
//! - The cache lock is never held across an `.await`.

use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bc_config::ClientCredentials;
use bc_config::constants::{
    TOKEN_CACHE_MAX_ENTRIES, TOKEN_CACHE_TTL_SECS, TOKEN_REQUEST_TIMEOUT_SECS,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::cache::TtlCache;
use crate::endpoints;
use crate::error::TokenError;

/// Bearer token returned by the identity platform.
#[derive(Debug, Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into().into()))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// True when the endpoint answered 200 without an `access_token` field.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for AccessToken {}

/// Outcome of a token exchange, as memoized.
pub type TokenResult = std::result::Result<AccessToken, TokenError>;

/// Cache key: the exact credential triple.
#[derive(Clone)]
struct CredentialKey {
    tenant_id: String,
    client_id: String,
    client_secret: SecretString,
}

impl CredentialKey {
    fn from_credentials(credentials: &ClientCredentials) -> Self {
        Self {
            tenant_id: credentials.tenant_id.clone(),
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
        }
    }
}

impl std::fmt::Debug for CredentialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialKey")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CredentialKey {
    fn eq(&self, other: &Self) -> bool {
        self.tenant_id == other.tenant_id
            && self.client_id == other.client_id
            && self.client_secret.expose_secret() == other.client_secret.expose_secret()
    }
}

impl Eq for CredentialKey {}

impl Hash for CredentialKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tenant_id.hash(state);
        self.client_id.hash(state);
        self.client_secret.expose_secret().hash(state);
    }
}

type TokenCache = TtlCache<CredentialKey, TokenResult>;

/// Exchanges client credentials for access tokens, memoizing the results.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    http: reqwest::Client,
    auth_base_url: String,
    scope: String,
    request_timeout: Duration,
    cache: Arc<Mutex<TokenCache>>,
}

impl TokenProvider {
    /// Create a provider with the default cache policy (60s, 16 entries).
    pub fn new(
        http: reqwest::Client,
        auth_base_url: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            http,
            auth_base_url: auth_base_url.into(),
            scope: scope.into(),
            request_timeout: Duration::from_secs(TOKEN_REQUEST_TIMEOUT_SECS),
            cache: Arc::new(Mutex::new(TtlCache::new(
                Duration::from_secs(TOKEN_CACHE_TTL_SECS),
                TOKEN_CACHE_MAX_ENTRIES,
            ))),
        }
    }

    /// Replace the cache with an empty one using the given TTL and capacity.
    pub fn with_cache_policy(mut self, ttl: Duration, capacity: usize) -> Self {
        self.cache = Arc::new(Mutex::new(TtlCache::new(ttl, capacity)));
        self
    }

    /// Override the token request timeout (30s by default).
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn auth_base_url(&self) -> &str {
        &self.auth_base_url
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    fn lock_cache(&self) -> MutexGuard<'_, TokenCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a token for the credentials.
    ///
    /// Incomplete credentials fail with [`TokenError::MissingCredentials`]
    /// without a network call. Otherwise a live cached result is returned
    /// as-is, or the exchange is performed and its result (success or
    /// failure) cached.
    pub async fn get_token(&self, credentials: &ClientCredentials) -> TokenResult {
        if !credentials.is_complete() {
            debug!("Token requested with incomplete credentials");
            return Err(TokenError::MissingCredentials);
        }

        let key = CredentialKey::from_credentials(credentials);
        let cached = self.lock_cache().get(&key);
        if let Some(cached) = cached {
            debug!(ok = cached.is_ok(), "Token served from cache");
            return cached;
        }

        let result = endpoints::request_token(
            &self.http,
            &self.auth_base_url,
            credentials,
            &self.scope,
            self.request_timeout,
        )
        .await;

        self.lock_cache().insert(key, result.clone());
        result
    }

    /// Drop the cached result for one credential triple.
    ///
    /// Returns true if an entry was removed.
    pub fn invalidate(&self, credentials: &ClientCredentials) -> bool {
        let key = CredentialKey::from_credentials(credentials);
        let removed = self.lock_cache().remove(&key).is_some();
        debug!(removed, "Token cache entry invalidated");
        removed
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Number of cached results, expired ones included until purged.
    pub fn cached_entries(&self) -> usize {
        self.lock_cache().len()
    }

    /// How long results are memoized and how many credential triples are kept.
    pub fn cache_policy(&self) -> (Duration, usize) {
        let cache = self.lock_cache();
        (cache.ttl(), cache.capacity())
    }
}
