/// `market` command: market cap and supply for a mint.
use super::{Action, CliError, Session};
use crate::cli::args::MintArgs;

/// Run `agent-mint market`.
///
/// # Errors
///
/// Returns `CliError` if no mint can be obtained, the source fails, or output
/// cannot be written.
pub async fn run(args: &MintArgs, session: &mut Session<'_>) -> Result<(), CliError> {
    let mint = session.mint(args)?;
    session.pending(&format!("Fetching market cap data for {mint}..."))?;

    let data = session
        .source
        .market_cap(&mint)
        .await
        .map_err(|e| CliError::fetch(Action::MarketCap, e))?;

    session.finish(Action::MarketCap, &data)
}
