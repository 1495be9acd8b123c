//! Configuration loader for environment variables and CLI overrides.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and `BC_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration (there is no persisted state).
//!
//! Invariants / Assumptions:
//! - CLI overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{
    ENV_API_BASE_URL, ENV_AUTH_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_ENVIRONMENT,
    ENV_TARGET_TENANT, ENV_TENANT_ID, ENV_TIMEOUT, env_var_or_none,
};
pub use error::ConfigError;
