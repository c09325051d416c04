/// `traders` command: most active traders of a mint.
use serde_json::Value;
use tracing::debug;

use super::{Action, CliError, Session};
use crate::cli::args::TradersArgs;

/// Run `agent-mint traders`.
///
/// # Errors
///
/// Returns `CliError` if no mint can be obtained, the source fails, or output
/// cannot be written.
pub async fn run(args: &TradersArgs, session: &mut Session<'_>) -> Result<(), CliError> {
    let mint = session.mint(&args.target)?;
    let limit = args.limit;
    session.pending(&format!("Fetching top {limit} traders for {mint}..."))?;

    let data = session
        .source
        .top_traders(&mint, limit)
        .await
        .map_err(|e| CliError::fetch(Action::Traders, e))?;
    let raw = data.raw();
    let returned = raw.get("traders").and_then(Value::as_array).map_or(0, Vec::len);
    let total = raw.get("traderCount").cloned().unwrap_or_default();
    debug!(returned, %total, "traders");

    session.finish(Action::Traders, &data)
}
