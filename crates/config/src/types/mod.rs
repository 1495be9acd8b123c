//! Configuration type definitions for BC Inspector.
//!
//! Responsibilities:
//! - Define configuration types for credentials, target and connection settings.
//! - Provide serialization helpers for sensitive types (masked secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables or CLI (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`masked_secret`, `duration_seconds`) are private modules.

mod auth;
mod connection;

pub use auth::{ClientCredentials, SECRET_MASK};
pub use connection::{Config, ConnectionConfig, TargetConfig};
