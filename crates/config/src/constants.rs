//! Centralized constants for the BC Inspector workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Base URL of the Microsoft identity platform (Entra ID).
pub const DEFAULT_AUTH_BASE_URL: &str = "https://login.microsoftonline.com";

/// Base URL of the Business Central APIs. Also the resource the token is scoped to.
pub const DEFAULT_API_BASE_URL: &str = "https://api.businesscentral.dynamics.com";

/// Suffix appended to the API resource to build the client-credentials scope.
pub const TOKEN_SCOPE_SUFFIX: &str = "/.default";

/// Admin center API version used for environment and app listings.
pub const ADMIN_API_VERSION: &str = "v2.21";

// =============================================================================
// Timeout Defaults & Bounds
// =============================================================================

/// Default HTTP timeout for resource GET requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Minimum allowed resource GET timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 5;

/// Maximum allowed resource GET timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 60;

/// Fixed timeout for the token exchange request in seconds.
pub const TOKEN_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Token Cache Defaults
// =============================================================================

/// How long a token exchange result is reused, in seconds.
pub const TOKEN_CACHE_TTL_SECS: u64 = 60;

/// Maximum number of credential triples kept in the token cache.
pub const TOKEN_CACHE_MAX_ENTRIES: usize = 16;
