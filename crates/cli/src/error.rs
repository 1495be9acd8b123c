//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError`, `ConfigError` and [`NothingFound`] to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - Probe exhaustion is reported with its own code, distinct from transport failures.

use bc_client::{ClientError, TokenError};
use bc_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for bc-inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - the token endpoint rejected the credentials.
    ///
    /// Scripts should check the tenant ID, client ID and secret.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// Nothing found - every candidate endpoint answered with a non-2xx status.
    ///
    /// Scripts should verify permissions, tenant and environment name.
    NotFound = 4,

    /// Validation error - missing or invalid input.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Every candidate endpoint for a listing failed.
#[derive(Error, Debug)]
#[error("No endpoint returned {what}. Check API permissions, the tenant ID and the environment name.")]
pub struct NothingFound {
    pub what: &'static str,
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Token(TokenError::MissingCredentials) => ExitCode::ValidationError,
            ClientError::Token(TokenError::Rejected { .. }) => ExitCode::AuthenticationFailed,
            ClientError::Token(TokenError::Request(_)) => ExitCode::ConnectionError,

            ClientError::HttpError(_) | ClientError::Timeout(_) => ExitCode::ConnectionError,

            ClientError::InvalidUrl(_)
            | ClientError::InvalidHeader(_)
            | ClientError::MissingInput(_) => ExitCode::ValidationError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ValidationError
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<NothingFound>().is_some() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
