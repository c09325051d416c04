/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod errors;
pub mod holders;
pub mod market;
pub mod pool;
pub mod trade;
pub mod traders;

use std::io::Write;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::args::{Command, MintArgs};
use crate::cli::output::Tabular;
use crate::cli::{OutputCtx, OutputFormat};
use crate::mint::MintAddress;
use crate::prompt::{Prompter, read_mint_address};
use crate::source::{MintDataSource, SourceError};
use crate::types::Payload;

pub use errors::{Action, CliError};

/// Everything a command handler talks to.
pub struct Session<'a> {
    /// Where data comes from.
    pub source: &'a dyn MintDataSource,
    /// Asked for a mint when `--mint` is absent.
    pub prompter: &'a mut dyn Prompter,
    /// Result sink (stdout in the binary).
    pub out: &'a mut dyn Write,
    /// Output format settings.
    pub ctx: OutputCtx,
}

impl Session<'_> {
    /// The mint from `--mint`, or one read interactively.
    ///
    /// A blank `--mint` counts as absent.
    fn mint(&mut self, args: &MintArgs) -> Result<MintAddress, CliError> {
        match args.mint.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            Some(mint) => Ok(mint.parse::<MintAddress>()?),
            None => {
                debug!("no --mint given, prompting");
                read_mint_address(self.prompter).map_err(CliError::Prompt)
            }
        }
    }

    fn pending(&mut self, message: &str) -> Result<(), CliError> {
        self.ctx.pending(self.out, message).map_err(CliError::Output)
    }

    /// Print the success line and the result.
    ///
    /// JSON output is the body as received. Tables read the typed view
    /// first, so a body that has no such view fails before anything is
    /// printed.
    fn finish<T>(&mut self, action: Action, payload: &Payload<T>) -> Result<(), CliError>
    where
        T: DeserializeOwned + Tabular,
    {
        let table = if self.ctx.format == OutputFormat::Table {
            let view = payload
                .view()
                .map_err(|e| CliError::fetch(action, SourceError::Decode(e)))?;
            Some(view)
        } else {
            None
        };

        self.ctx
            .success(self.out, action.success_message())
            .map_err(CliError::Output)?;
        match &table {
            Some(view) => self.ctx.write_table(self.out, view),
            None => self.ctx.write_json(self.out, payload.raw()),
        }
        .map_err(CliError::Output)
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub async fn dispatch(command: &Command, session: &mut Session<'_>) -> Result<(), CliError> {
    match command {
        Command::Pool(args) => pool::run(args, session).await,
        Command::Market(args) => market::run(args, session).await,
        Command::Holders(args) => holders::run(args, session).await,
        Command::Traders(args) => traders::run(args, session).await,
        Command::Trade(args) => trade::run(args, session).await,
    }
}
