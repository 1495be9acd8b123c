//! Error types for the Business Central client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure of a token exchange.
///
/// Token results are memoized, so this type is `Clone` and carries only
/// rendered messages, never the underlying transport error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// One or more of tenant ID, client ID and client secret is empty.
    #[error("Missing tenant/client/secret.")]
    MissingCredentials,

    /// The token endpoint answered with a status other than 200.
    #[error("Token error {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The token request could not be completed or its response could not be read.
    #[error("Token exception: {0}")]
    Request(String),
}

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Token acquisition failed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid extra header name or value.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A required user input is empty.
    #[error("Missing required input: {0}")]
    MissingInput(String),
}

impl ClientError {
    /// Map a reqwest error, turning timeouts into [`ClientError::Timeout`].
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::HttpError(err)
        }
    }

    /// Check if this error is an input error reported before any network call.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Token(TokenError::MissingCredentials)
                | Self::MissingInput(_)
                | Self::InvalidUrl(_)
                | Self::InvalidHeader(_)
        )
    }

    /// Check if this error indicates the token endpoint refused the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Token(TokenError::Rejected { .. }))
    }

    /// Check if this error is a network or timeout failure.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Token(TokenError::Request(_)) | Self::HttpError(_) | Self::Timeout(_)
        )
    }
}
