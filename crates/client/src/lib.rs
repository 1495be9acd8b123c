//! Business Central REST client.
//!
//! This crate exchanges Entra ID client credentials for bearer tokens,
//! issues authenticated GET requests against the Business Central APIs and
//! probes ordered lists of candidate endpoints until one answers.

mod auth;
pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod error;
mod inspector;
pub mod probe;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AccessToken, TokenProvider, TokenResult};
pub use client::BcClient;
pub use client::builder::BcClientBuilder;
pub use client::cache::TtlCache;
pub use endpoints::{AuthGetResponse, GetOptions, ResponseBody};
pub use error::{ClientError, Result, TokenError};
pub use inspector::{Action, ActionOutcome, InspectorSession};
pub use probe::{EndpointCandidate, ProbeResult};
