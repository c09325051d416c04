/// `holders` command: largest holders of a mint.
use serde_json::Value;
use tracing::debug;

use super::{Action, CliError, Session};
use crate::cli::args::HoldersArgs;

/// Run `agent-mint holders`.
///
/// # Errors
///
/// Returns `CliError` if no mint can be obtained, the source fails, or output
/// cannot be written.
pub async fn run(args: &HoldersArgs, session: &mut Session<'_>) -> Result<(), CliError> {
    let mint = session.mint(&args.target)?;
    let limit = args.limit;
    session.pending(&format!("Fetching top {limit} token holders for {mint}..."))?;

    let data = session
        .source
        .token_holders(&mint, limit)
        .await
        .map_err(|e| CliError::fetch(Action::Holders, e))?;
    let raw = data.raw();
    let returned = raw.get("topHolders").and_then(Value::as_array).map_or(0, Vec::len);
    let total = raw.get("totalHolders").cloned().unwrap_or_default();
    debug!(returned, %total, "holders");

    session.finish(Action::Holders, &data)
}
