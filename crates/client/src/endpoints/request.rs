//! Authenticated GET helper.
//!
//! This module is responsible for:
//! - Attaching the bearer token and `Accept: application/json` to a GET request
//! - Letting caller-supplied headers override those defaults
//! - Decoding the body as JSON, falling back to the raw text
//!
//! # What this module does NOT handle:
//! - Retries (a single attempt is made)
//! - Treating non-2xx statuses as errors (the status is returned to the caller)
//!
//! # Invariants
//! - The `Authorization` header value is marked sensitive
//! - A body that is not valid JSON is returned unmodified as [`ResponseBody::Text`]

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::auth::AccessToken;
use crate::error::{ClientError, Result};

/// Decoded response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The raw body, when it is not valid JSON.
    Text(String),
}

impl ResponseBody {
    /// Decode a body, trying JSON first.
    pub fn decode(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Pretty-printed JSON, or the raw text as-is.
    pub fn to_pretty_string(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Status, decoded body and headers of an authenticated GET.
#[derive(Debug, Clone)]
pub struct AuthGetResponse {
    pub status: u16,
    pub body: ResponseBody,
    pub headers: HeaderMap,
}

impl AuthGetResponse {
    /// True for statuses in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Optional extra headers and query parameters for [`auth_get`].
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. It replaces a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

fn build_headers(token: &AccessToken, extra: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|_| ClientError::InvalidHeader("Authorization".to_string()))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Issue an authenticated GET request.
///
/// Any HTTP status is returned as data. Transport failures surface as
/// [`ClientError::Timeout`] or [`ClientError::HttpError`].
pub async fn auth_get(
    client: &Client,
    url: &str,
    token: &AccessToken,
    options: &GetOptions,
    timeout: Duration,
) -> Result<AuthGetResponse> {
    let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
    let headers = build_headers(token, &options.headers)?;

    debug!(url = %parsed, "GET");

    let mut builder = client.get(parsed).headers(headers).timeout(timeout);
    if !options.query.is_empty() {
        builder = builder.query(&options.query);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    debug!(status, bytes = text.len(), "GET completed");

    Ok(AuthGetResponse {
        status,
        body: ResponseBody::decode(text),
        headers,
    })
}
