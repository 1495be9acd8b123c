//! Business Central Environment Inspector - command-line front end.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve configuration and run one inspector action per invocation.
//! - Print results and exit with a structured exit code.
//!
//! Does NOT handle:
//! - Token exchange or REST calls (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use std::time::Duration;

use args::Cli;
use bc_config::{Config, ConfigError, ConfigLoader};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Merge environment variables and CLI overrides (CLI wins).
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref tenant_id) = cli.tenant_id {
        loader = loader.with_tenant_id(tenant_id.clone());
    }
    if let Some(ref client_id) = cli.client_id {
        loader = loader.with_client_id(client_id.clone());
    }
    if let Some(ref secret) = cli.client_secret {
        loader = loader.with_client_secret(secret.clone());
    }
    if let Some(ref bc_tenant) = cli.bc_tenant {
        loader = loader.with_bc_tenant(bc_tenant.clone());
    }
    if let Some(ref environment) = cli.environment {
        loader = loader.with_environment(environment.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(ref url) = cli.auth_base_url {
        loader = loader.with_auth_base_url(url.clone());
    }
    if let Some(ref url) = cli.api_base_url {
        loader = loader.with_api_base_url(url.clone());
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
