//! Output formatting for command results.
//!
//! Responsibilities:
//! - Render tokens, probe results, raw responses and configuration as JSON or text.
//! - Summarize OData `value` collections in text mode.
//!
//! Does NOT handle:
//! - Writing to stdout (callers print the returned string).
//!
//! Invariants:
//! - Tokens are masked unless the caller explicitly asks to reveal them.
//! - JSON output is always pretty-printed and newline-terminated.

use anyhow::Result;
use bc_client::{AccessToken, AuthGetResponse, ProbeResult, ResponseBody};
use bc_config::{Config, SECRET_MASK};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Fields tried, in order, to name an item of an OData collection.
const NAME_FIELDS: &[&str] = &["displayName", "friendlyName", "name", "id"];

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

#[derive(Serialize)]
struct TokenOutput<'a> {
    status: &'static str,
    token: &'a str,
    length: usize,
}

pub fn format_token(token: &AccessToken, show: bool, format: OutputFormat) -> Result<String> {
    let shown = if show { token.expose_secret() } else { SECRET_MASK };

    match format {
        OutputFormat::Json => to_pretty_json(&TokenOutput {
            status: "acquired",
            token: shown,
            length: token.expose_secret().len(),
        }),
        OutputFormat::Text => {
            let mut output = String::from("Token acquired.\n");
            if show {
                output.push_str(shown);
                output.push('\n');
            }
            Ok(output)
        }
    }
}

/// Display name of one collection item, if it has a recognizable field.
fn item_name(item: &Value) -> Option<&str> {
    NAME_FIELDS
        .iter()
        .find_map(|field| item.get(field).and_then(Value::as_str))
        .filter(|name| !name.is_empty())
}

/// Text rendering of a response body: a bullet list for OData collections,
/// the pretty body otherwise.
fn summarize_body(body: &ResponseBody) -> String {
    let items = body
        .as_json()
        .and_then(|json| json.get("value"))
        .and_then(Value::as_array);

    let Some(items) = items else {
        let mut output = body.to_pretty_string();
        if !output.ends_with('\n') {
            output.push('\n');
        }
        return output;
    };

    let mut output = format!("{} item(s)\n", items.len());
    for item in items {
        match (item_name(item), item.get("id").and_then(Value::as_str)) {
            (Some(name), Some(id)) if name != id => {
                output.push_str(&format!("- {name} ({id})\n"));
            }
            (Some(name), _) => output.push_str(&format!("- {name}\n")),
            (None, _) => output.push_str(&format!("- {item}\n")),
        }
    }
    output
}

pub fn format_probe(result: &ProbeResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_pretty_json(result),
        OutputFormat::Text => Ok(format!(
            "Found via {} (HTTP {})\nURL: {}\n\n{}",
            result.label,
            result.status,
            result.url,
            summarize_body(&result.data)
        )),
    }
}

#[derive(Serialize)]
struct ResponseOutput<'a> {
    status: u16,
    headers: Map<String, Value>,
    body: &'a ResponseBody,
}

/// Header map as a JSON object. Repeated headers are joined with ", ".
fn headers_to_json(response: &AuthGetResponse) -> Map<String, Value> {
    response
        .headers
        .keys()
        .map(|name| {
            let joined = response
                .headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_str().to_string(), Value::String(joined))
        })
        .collect()
}

pub fn format_response(response: &AuthGetResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            to_pretty_json(&ResponseOutput {
                status: response.status,
                headers: headers_to_json(response),
                body: &response.body,
            })
        }
        OutputFormat::Text => Ok(format!(
            "HTTP {}\n\n{}",
            response.status,
            summarize_body(&response.body)
        )),
    }
}

pub fn format_config(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_pretty_json(config),
        OutputFormat::Text => {
            let secret = if config.auth.has_secret() { SECRET_MASK } else { "" };
            Ok(format!(
                "Tenant ID:      {}\nClient ID:      {}\nClient secret:  {}\nBC tenant:      {}\nEnvironment:    {}\nTimeout:        {}s\nAuth base URL:  {}\nAPI base URL:   {}\n",
                config.auth.tenant_id,
                config.auth.client_id,
                secret,
                config.target.resolved_tenant(&config.auth.tenant_id),
                config.target.environment,
                config.connection.timeout.as_secs(),
                config.connection.auth_base_url,
                config.connection.api_base_url,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn probe_result(data: ResponseBody) -> ProbeResult {
        ProbeResult {
            label: "API v2.0 companies".to_string(),
            url: "https://api.example.com/v2.0/t/Production/api/v2.0/companies".to_string(),
            status: 200,
            data,
        }
    }

    #[test]
    fn test_token_masked_by_default() {
        let token = AccessToken::new("eyJ0eXAi.payload.sig");
        let output = format_token(&token, false, OutputFormat::Json).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["status"], "acquired");
        assert_eq!(json["token"], SECRET_MASK);
        assert_eq!(json["length"], 20);
        assert!(!output.contains("payload"));
    }

    #[test]
    fn test_token_shown_on_request() {
        let token = AccessToken::new("eyJ0eXAi.payload.sig");
        let output = format_token(&token, true, OutputFormat::Text).unwrap();
        assert_eq!(output, "Token acquired.\neyJ0eXAi.payload.sig\n");
    }

    #[test]
    fn test_probe_text_lists_collection_items() {
        let result = probe_result(ResponseBody::Json(json!({
            "value": [
                {"id": "c1", "name": "CRONUS", "displayName": "CRONUS USA, Inc."},
                {"id": "c2", "name": "My Company"},
                {"id": "c3"}
            ]
        })));
        let output = format_probe(&result, OutputFormat::Text).unwrap();

        assert!(output.starts_with("Found via API v2.0 companies (HTTP 200)\n"));
        assert!(output.contains("3 item(s)\n"));
        assert!(output.contains("- CRONUS USA, Inc. (c1)\n"));
        assert!(output.contains("- My Company (c2)\n"));
        assert!(output.contains("- c3\n"));
    }

    #[test]
    fn test_probe_text_falls_back_to_raw_body() {
        let result = probe_result(ResponseBody::Text("not json".to_string()));
        let output = format_probe(&result, OutputFormat::Text).unwrap();
        assert!(output.ends_with("\n\nnot json\n"));
    }

    #[test]
    fn test_probe_json_shape() {
        let result = probe_result(ResponseBody::Json(json!({"value": []})));
        let json: Value =
            serde_json::from_str(&format_probe(&result, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["label"], "API v2.0 companies");
        assert_eq!(json["status"], 200);
        assert_eq!(json["data"], json!({"value": []}));
    }

    #[test]
    fn test_response_text_and_json() {
        let response = AuthGetResponse {
            status: 404,
            body: ResponseBody::Json(json!({"error": {"code": "NotFound"}})),
            headers: Default::default(),
        };

        let text = format_response(&response, OutputFormat::Text).unwrap();
        assert!(text.starts_with("HTTP 404\n\n"));
        assert!(text.contains("\"NotFound\""));

        let json: Value =
            serde_json::from_str(&format_response(&response, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["headers"], json!({}));
        assert_eq!(json["body"]["error"]["code"], "NotFound");
    }

    #[test]
    fn test_config_text_masks_secret() {
        let mut config = Config::default();
        config.auth = bc_config::ClientCredentials::new("dir", "app", "hunter2");
        let output = format_config(&config, OutputFormat::Text).unwrap();

        assert!(output.contains("Client secret:  ********"));
        assert!(output.contains("BC tenant:      dir"));
        assert!(!output.contains("hunter2"));
    }
}
