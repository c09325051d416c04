/// `pool` command: pool data for a mint.
use super::{Action, CliError, Session};
use crate::cli::args::MintArgs;

/// Run `agent-mint pool`.
///
/// # Errors
///
/// Returns `CliError` if no mint can be obtained, the source fails, or output
/// cannot be written.
pub async fn run(args: &MintArgs, session: &mut Session<'_>) -> Result<(), CliError> {
    let mint = session.mint(args)?;
    session.pending(&format!("Fetching pool data for {mint}..."))?;

    let data = session
        .source
        .pool_data(&mint)
        .await
        .map_err(|e| CliError::fetch(Action::Pool, e))?;

    session.finish(Action::Pool, &data)
}
