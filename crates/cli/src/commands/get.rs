//! Raw authenticated GET command.

use anyhow::Result;
use bc_client::{Action, ActionOutcome, GetOptions, InspectorSession};

use crate::formatters::{OutputFormat, format_response};

pub async fn run(
    mut session: InspectorSession,
    url: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<()> {
    let options = GetOptions { headers, query };
    let outcome = session.handle(Action::Get { url, options }).await?;

    let ActionOutcome::Response(response) = outcome else {
        anyhow::bail!("Unexpected outcome for GET request");
    };

    print!("{}", format_response(&response, format)?);
    Ok(())
}
