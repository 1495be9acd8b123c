//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read every connection input from a flag or its `BC_*` environment variable.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate timeout bounds or base URLs (see `bc_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "bc-inspector")]
#[command(
    about = "Business Central Environment Inspector - list environments, companies and installed apps",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  bc-inspector token\n  bc-inspector --environment Production companies\n  bc-inspector --environment Sandbox apps --company-id 5f0b5e5a-8b7c-ee11-817b-000d3a2c9f1e\n  bc-inspector get https://api.businesscentral.dynamics.com/v2.0/Production/api/v2.0/companies -q '$top=5'\n"
)]
pub struct Cli {
    /// Directory (tenant) ID of the Entra app registration
    #[arg(long, global = true, env = "BC_TENANT_ID")]
    pub tenant_id: Option<String>,

    /// Application (client) ID
    #[arg(long, global = true, env = "BC_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Client secret
    #[arg(long, global = true, env = "BC_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Business Central tenant ID used in API paths (GUID or 'default').
    /// Defaults to the directory tenant ID.
    #[arg(long, global = true, env = "BC_TARGET_TENANT")]
    pub bc_tenant: Option<String>,

    /// Environment name (e.g., Production, Sandbox)
    #[arg(short, long, global = true, env = "BC_ENVIRONMENT")]
    pub environment: Option<String>,

    /// HTTP timeout for API requests in seconds, 5-60 [env: BC_TIMEOUT]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Identity platform base URL
    #[arg(long, global = true, env = "BC_AUTH_BASE_URL")]
    pub auth_base_url: Option<String>,

    /// Business Central API base URL (also the token resource)
    #[arg(long, global = true, env = "BC_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Acquire an access token for the configured credentials
    Token {
        /// Discard the memoized result and request a new token
        #[arg(long)]
        refresh: bool,

        /// Print the raw token instead of a masked placeholder
        #[arg(long)]
        show: bool,
    },

    /// List environments visible to the app (admin center API)
    Environments,

    /// List companies in the environment
    Companies,

    /// List extensions installed in the environment
    Apps {
        /// Company ID for the automation API fallback
        #[arg(long)]
        company_id: Option<String>,
    },

    /// Authenticated GET against any URL
    Get {
        /// Absolute URL to request
        url: String,

        /// Query parameter (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        query: Vec<(String, String)>,

        /// Extra request header, overriding the defaults (repeatable)
        #[arg(short = 'H', long = "header", value_name = "NAME=VALUE", value_parser = parse_key_val)]
        header: Vec<(String, String)>,
    },

    /// Print the effective configuration (secret masked)
    Config,
}

/// Parse a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
