//! OAuth 2.0 client-credentials token endpoint.

use std::time::Duration;

use bc_config::ClientCredentials;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;

use crate::auth::AccessToken;
use crate::endpoints::encode_path_segment;
use crate::error::TokenError;

/// Exchange client credentials for an access token.
///
/// Posts a form-encoded client-credentials grant to
/// `{auth_base_url}/{tenant_id}/oauth2/v2.0/token`.
///
/// Only status 200 counts as success. Its body must be a JSON object; the
/// `access_token` field is returned, or an empty token when the field is
/// missing or not a string. Every other status yields
/// [`TokenError::Rejected`] carrying the body verbatim. Transport failures and
/// unreadable 200 bodies yield [`TokenError::Request`].
///
/// Credentials are not checked for emptiness here; see
/// [`TokenProvider::get_token`](crate::TokenProvider::get_token).
pub async fn request_token(
    client: &Client,
    auth_base_url: &str,
    credentials: &ClientCredentials,
    scope: &str,
    timeout: Duration,
) -> Result<AccessToken, TokenError> {
    let url = format!(
        "{}/{}/oauth2/v2.0/token",
        auth_base_url,
        encode_path_segment(&credentials.tenant_id)
    );
    debug!(tenant_id = %credentials.tenant_id, "Requesting access token");

    let form = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.expose_secret()),
        ("grant_type", "client_credentials"),
        ("scope", scope),
    ];

    let response = client
        .post(&url)
        .timeout(timeout)
        .form(&form)
        .send()
        .await
        .map_err(|e| TokenError::Request(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| TokenError::Request(e.to_string()))?;

    if status != 200 {
        debug!(status, "Token endpoint rejected the request");
        return Err(TokenError::Rejected { status, body });
    }

    let json: Value =
        serde_json::from_str(&body).map_err(|e| TokenError::Request(e.to_string()))?;
    let Some(fields) = json.as_object() else {
        return Err(TokenError::Request(
            "token response is not a JSON object".to_string(),
        ));
    };

    let token = fields
        .get("access_token")
        .and_then(Value::as_str)
        .unwrap_or_default();
    debug!(status, empty = token.is_empty(), "Access token received");

    Ok(AccessToken::new(token))
}
