//! Listing commands: environments, companies and installed apps.
//!
//! Responsibilities:
//! - Map each listing subcommand to its `InspectorSession` action.
//! - Print the first successful candidate, or fail with [`NothingFound`].
//!
//! Does NOT handle:
//! - Candidate URL construction (see `bc_client::catalog`).

use anyhow::{Context, Result};
use bc_client::{Action, ActionOutcome, InspectorSession};
use tracing::info;

use crate::error::NothingFound;
use crate::formatters::{OutputFormat, format_probe};

/// What to list.
#[derive(Debug, Clone)]
pub enum Listing {
    Environments,
    Companies,
    InstalledApps { company_id: Option<String> },
}

impl Listing {
    fn action(self) -> Action {
        match self {
            Listing::Environments => Action::ListEnvironments,
            Listing::Companies => Action::ListCompanies,
            Listing::InstalledApps { company_id } => Action::ListInstalledApps { company_id },
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Listing::Environments => "environments",
            Listing::Companies => "companies",
            Listing::InstalledApps { .. } => "installed apps",
        }
    }
}

pub async fn run(
    mut session: InspectorSession,
    listing: Listing,
    format: OutputFormat,
) -> Result<()> {
    let description = listing.description();
    info!("Listing {}...", description);

    let outcome = session
        .handle(listing.action())
        .await
        .with_context(|| format!("Failed to list {description}"))?;

    match outcome {
        ActionOutcome::Found(found) => {
            print!("{}", format_probe(&found, format)?);
            Ok(())
        }
        ActionOutcome::NothingFound { what } => Err(NothingFound { what }.into()),
        _ => anyhow::bail!("Unexpected outcome while listing {description}"),
    }
}
