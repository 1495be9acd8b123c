//! Token command implementation.

use anyhow::Result;
use bc_client::{Action, ActionOutcome, InspectorSession};
use tracing::warn;

use crate::formatters::{OutputFormat, format_token};

pub async fn run(
    mut session: InspectorSession,
    refresh: bool,
    show: bool,
    format: OutputFormat,
) -> Result<()> {
    let outcome = session
        .handle(Action::Authenticate {
            force_refresh: refresh,
        })
        .await?;

    let ActionOutcome::TokenAcquired(token) = outcome else {
        anyhow::bail!("Unexpected outcome for token request");
    };

    if token.is_empty() {
        warn!("Token endpoint answered 200 without an access_token field");
    }

    print!("{}", format_token(&token, show, format)?);
    Ok(())
}
