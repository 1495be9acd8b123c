//! Inspector session: the request handler behind every user action.
//!
//! Responsibilities:
//! - Hold the user inputs (credentials, target) and the last acquired token.
//! - Turn one [`Action`] into one [`ActionOutcome`], acquiring a token first
//!   when a resource action needs one.
//!
//! Does NOT handle:
//! - Rendering outcomes (see the CLI formatters).
//! - Token memoization (delegated to the client's [`TokenProvider`](crate::TokenProvider)).
//!
//! Invariants:
//! - Actions that need an environment fail with [`ClientError::MissingInput`]
//!   before any network call when it is empty.
//! - A failed authentication clears the held token.
//! - Every resource action asks the token provider for a token; the held
//!   token is never reused past the provider's cache TTL.

use bc_config::{ClientCredentials, Config, TargetConfig};
use tracing::{debug, info};

use crate::auth::AccessToken;
use crate::catalog;
use crate::client::BcClient;
use crate::endpoints::{AuthGetResponse, GetOptions};
use crate::error::{ClientError, Result};
use crate::probe::{EndpointCandidate, ProbeResult};

/// A single user action.
#[derive(Debug, Clone)]
pub enum Action {
    /// Acquire a token. `force_refresh` bypasses the memoized result.
    Authenticate { force_refresh: bool },
    ListEnvironments,
    ListCompanies,
    ListInstalledApps { company_id: Option<String> },
    /// Raw authenticated GET against an absolute URL.
    Get { url: String, options: GetOptions },
}

/// Result of handling an [`Action`].
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    TokenAcquired(AccessToken),
    Found(ProbeResult),
    /// Every candidate answered with a non-2xx status.
    NothingFound { what: &'static str },
    Response(AuthGetResponse),
}

/// User inputs plus the current token, handled one action at a time.
#[derive(Debug)]
pub struct InspectorSession {
    client: BcClient,
    credentials: ClientCredentials,
    target: TargetConfig,
    token: Option<AccessToken>,
}

impl InspectorSession {
    pub fn new(client: BcClient, credentials: ClientCredentials, target: TargetConfig) -> Self {
        Self {
            client,
            credentials,
            target,
            token: None,
        }
    }

    /// Create a session from the credentials and target of a loaded config.
    pub fn from_config(client: BcClient, config: &Config) -> Self {
        Self::new(client, config.auth.clone(), config.target.clone())
    }

    pub fn client(&self) -> &BcClient {
        &self.client
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    pub fn target(&self) -> &TargetConfig {
        &self.target
    }

    /// The token returned by the last successful acquisition, if any.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Replace the credentials. The held token is dropped.
    pub fn set_credentials(&mut self, credentials: ClientCredentials) {
        self.credentials = credentials;
        self.token = None;
    }

    pub fn set_target(&mut self, target: TargetConfig) {
        self.target = target;
    }

    /// Tenant segment for API URLs.
    pub fn bc_tenant(&self) -> &str {
        self.target.resolved_tenant(&self.credentials.tenant_id)
    }

    fn require_environment(&self) -> Result<&str> {
        if self.target.environment.is_empty() {
            return Err(ClientError::MissingInput("environment".to_string()));
        }
        Ok(&self.target.environment)
    }

    /// Acquire a token, optionally bypassing the memoized result.
    pub async fn authenticate(&mut self, force_refresh: bool) -> Result<AccessToken> {
        if force_refresh {
            self.client.invalidate_token(&self.credentials);
        }

        match self.client.token(&self.credentials).await {
            Ok(token) => {
                info!("Token acquired");
                self.token = Some(token.clone());
                Ok(token)
            }
            Err(e) => {
                debug!(error = %e, "Token acquisition failed");
                self.token = None;
                Err(e.into())
            }
        }
    }

    /// Token for a resource action. Always goes through the client's
    /// memoized path, so a token older than the cache TTL is re-acquired.
    async fn ensure_token(&mut self) -> Result<AccessToken> {
        self.authenticate(false).await
    }

    /// Handle one user action.
    pub async fn handle(&mut self, action: Action) -> Result<ActionOutcome> {
        debug!(?action, "Handling action");

        match action {
            Action::Authenticate { force_refresh } => self
                .authenticate(force_refresh)
                .await
                .map(ActionOutcome::TokenAcquired),
            Action::ListEnvironments => {
                let candidates = catalog::environment_candidates(self.client.api_base_url());
                self.probe("environments", &candidates).await
            }
            Action::ListCompanies => {
                let environment = self.require_environment()?;
                let candidates = catalog::company_candidates(
                    self.client.api_base_url(),
                    self.bc_tenant(),
                    environment,
                );
                self.probe("companies", &candidates).await
            }
            Action::ListInstalledApps { company_id } => {
                let environment = self.require_environment()?;
                let candidates = catalog::installed_app_candidates(
                    self.client.api_base_url(),
                    self.bc_tenant(),
                    environment,
                    company_id.as_deref(),
                );
                self.probe("installed apps", &candidates).await
            }
            Action::Get { url, options } => {
                if url.trim().is_empty() {
                    return Err(ClientError::MissingInput("url".to_string()));
                }
                let token = self.ensure_token().await?;
                self.client
                    .auth_get(url.trim(), &token, &options)
                    .await
                    .map(ActionOutcome::Response)
            }
        }
    }

    async fn probe(
        &mut self,
        what: &'static str,
        candidates: &[EndpointCandidate],
    ) -> Result<ActionOutcome> {
        let token = self.ensure_token().await?;
        match self.client.probe(&token, candidates).await? {
            Some(found) => {
                info!(what, label = %found.label, "Found");
                Ok(ActionOutcome::Found(found))
            }
            None => Ok(ActionOutcome::NothingFound { what }),
        }
    }
}
