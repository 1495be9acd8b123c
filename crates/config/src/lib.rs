//! Configuration management for BC Inspector.
//!
//! This crate provides types and loaders for the Business Central inspector
//! configuration: client credentials, the target tenant/environment, and
//! connection settings sourced from environment variables and CLI overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ENV_API_BASE_URL, ENV_AUTH_BASE_URL, ENV_CLIENT_ID,
    ENV_CLIENT_SECRET, ENV_ENVIRONMENT, ENV_TARGET_TENANT, ENV_TENANT_ID, ENV_TIMEOUT,
    env_var_or_none,
};
pub use types::{ClientCredentials, Config, ConnectionConfig, SECRET_MASK, TargetConfig};
