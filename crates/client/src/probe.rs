//! Ordered endpoint probing.
//!
//! Candidates are requested one at a time, in order, and probing stops at the
//! first 2xx response. A non-2xx status moves on to the next candidate; a
//! transport failure aborts the probe.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::auth::AccessToken;
use crate::endpoints::{GetOptions, ResponseBody, auth_get};
use crate::error::Result;

/// A labelled URL to try. Position in the candidate list is its priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointCandidate {
    pub label: String,
    pub url: String,
}

impl EndpointCandidate {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The first candidate that answered with a 2xx status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub label: String,
    pub url: String,
    pub status: u16,
    pub data: ResponseBody,
}

/// Try each candidate in order and return the first success.
///
/// Returns `Ok(None)` when every candidate answered with a non-2xx status,
/// or when `candidates` is empty.
pub async fn probe_endpoints(
    client: &Client,
    token: &AccessToken,
    candidates: &[EndpointCandidate],
    timeout: Duration,
) -> Result<Option<ProbeResult>> {
    let options = GetOptions::default();

    for candidate in candidates {
        let response = auth_get(client, &candidate.url, token, &options, timeout).await?;

        if response.is_success() {
            debug!(label = %candidate.label, status = response.status, "Candidate succeeded");
            return Ok(Some(ProbeResult {
                label: candidate.label.clone(),
                url: candidate.url.clone(),
                status: response.status,
                data: response.body,
            }));
        }

        debug!(label = %candidate.label, status = response.status, "Candidate failed, trying next");
    }

    debug!(tried = candidates.len(), "No candidate succeeded");
    Ok(None)
}
