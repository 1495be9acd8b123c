//! Config command: print the effective configuration.

use anyhow::Result;
use bc_config::Config;

use crate::formatters::{OutputFormat, format_config};

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    print!("{}", format_config(config, format)?);
    Ok(())
}
