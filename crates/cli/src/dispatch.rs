//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//! - Build the inspector session for commands that talk to the network.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use bc_config::Config;

use crate::args::{Cli, Commands};
use crate::commands::{self, resources::Listing};

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let format = cli.output;

    match cli.command {
        Commands::Config => commands::config::run(&config, format)?,
        Commands::Token { refresh, show } => {
            let session = commands::build_session(&config)?;
            commands::token::run(session, refresh, show, format).await?;
        }
        Commands::Environments => {
            let session = commands::build_session(&config)?;
            commands::resources::run(session, Listing::Environments, format).await?;
        }
        Commands::Companies => {
            let session = commands::build_session(&config)?;
            commands::resources::run(session, Listing::Companies, format).await?;
        }
        Commands::Apps { company_id } => {
            let session = commands::build_session(&config)?;
            commands::resources::run(session, Listing::InstalledApps { company_id }, format)
                .await?;
        }
        Commands::Get { url, query, header } => {
            let session = commands::build_session(&config)?;
            commands::get::run(session, url, query, header, format).await?;
        }
    }

    Ok(())
}
