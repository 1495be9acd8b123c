//! CLI command implementations.

pub mod config;
pub mod get;
pub mod resources;
pub mod token;

use anyhow::{Context, Result};
use bc_client::{BcClient, InspectorSession};
use bc_config::Config;

/// Build a client and session from the resolved configuration.
pub fn build_session(config: &Config) -> Result<InspectorSession> {
    let client = BcClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Business Central client")?;
    Ok(InspectorSession::from_config(client, config))
}
