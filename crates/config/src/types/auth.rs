//! Credential types for the client-credentials grant.
//!
//! Responsibilities:
//! - Hold the directory tenant ID, client ID and client secret entered by the user.
//! - Normalize user input (tenant and client IDs are trimmed, the secret is kept verbatim).
//! - Serialize with the secret masked.
//!
//! Does NOT handle:
//! - The token exchange itself (see client crate).
//! - Validation beyond non-emptiness.
//!
//! Invariants:
//! - The client secret is a `secrecy::SecretString` and never appears in `Debug` output.
//! - Serialization writes a fixed mask instead of the secret value.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Module for serializing a SecretString as a fixed mask.
mod masked_secret {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    pub const MASK: &str = "********";

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if secret.expose_secret().is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(MASK)
        }
    }
}

pub use masked_secret::MASK as SECRET_MASK;

/// Tenant/client/secret triple used for the client-credentials grant.
#[derive(Debug, Clone, Serialize)]
pub struct ClientCredentials {
    /// Directory (tenant) ID the token is requested from.
    pub tenant_id: String,
    /// Application (client) ID of the Entra app registration.
    pub client_id: String,
    /// Client secret of the app registration.
    #[serde(serialize_with = "masked_secret::serialize")]
    pub client_secret: SecretString,
}

impl ClientCredentials {
    /// Build credentials from raw user input.
    ///
    /// Surrounding whitespace is removed from the tenant and client IDs.
    /// The secret is stored exactly as given.
    pub fn new(
        tenant_id: impl AsRef<str>,
        client_id: impl AsRef<str>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.as_ref().trim().to_string(),
            client_id: client_id.as_ref().trim().to_string(),
            client_secret: SecretString::new(client_secret.into().into()),
        }
    }

    /// Returns true when all three fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.tenant_id.is_empty() && !self.client_id.is_empty() && self.has_secret()
    }

    /// Returns true when a non-empty secret was provided.
    pub fn has_secret(&self) -> bool {
        !self.client_secret.expose_secret().is_empty()
    }
}

impl Default for ClientCredentials {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_ids_but_not_secret() {
        let creds = ClientCredentials::new("  tenant \n", "\tclient ", " secret ");
        assert_eq!(creds.tenant_id, "tenant");
        assert_eq!(creds.client_id, "client");
        assert_eq!(creds.client_secret.expose_secret(), " secret ");
    }

    #[test]
    fn test_is_complete() {
        assert!(ClientCredentials::new("t", "c", "s").is_complete());
        assert!(!ClientCredentials::new("", "c", "s").is_complete());
        assert!(!ClientCredentials::new("t", "  ", "s").is_complete());
        assert!(!ClientCredentials::new("t", "c", "").is_complete());
        assert!(!ClientCredentials::default().is_complete());
    }

    #[test]
    fn test_secret_not_exposed_in_debug() {
        let creds = ClientCredentials::new("tenant", "client", "super-secret-value");
        let debug_output = format!("{:?}", creds);
        assert!(!debug_output.contains("super-secret-value"));
        assert!(debug_output.contains("tenant"));
    }

    #[test]
    fn test_serialize_masks_secret() {
        let creds = ClientCredentials::new("tenant", "client", "super-secret-value");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["tenant_id"], "tenant");
        assert_eq!(json["client_secret"], SECRET_MASK);

        let empty = serde_json::to_value(ClientCredentials::default()).unwrap();
        assert_eq!(empty["client_secret"], "");
    }
}
