//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test timeout and base URL validation.
//! - Test dotenv loading.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests touching cwd also hold `global_test_lock()`.

use std::sync::Mutex;

pub mod basic_tests;
pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `apply_env` reads, unset. Used to isolate tests from the host.
pub fn cleared_bc_env() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::loader::env::*;
    vec![
        (ENV_TENANT_ID, None),
        (ENV_CLIENT_ID, None),
        (ENV_CLIENT_SECRET, None),
        (ENV_TARGET_TENANT, None),
        (ENV_ENVIRONMENT, None),
        (ENV_TIMEOUT, None),
        (ENV_AUTH_BASE_URL, None),
        (ENV_API_BASE_URL, None),
    ]
}
