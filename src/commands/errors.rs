/// Errors from the command layer.
use std::io;

use thiserror::Error;

use crate::mint::MintError;
use crate::source::SourceError;

/// Fallback text for an error that renders to nothing.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// The data a command fetches; names the operation in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pool,
    MarketCap,
    Holders,
    Traders,
    Trade,
}

impl Action {
    /// Noun phrase used in "Error fetching ..." lines.
    #[must_use]
    pub fn subject(self) -> &'static str {
        match self {
            Self::Pool => "pool data",
            Self::MarketCap => "market cap data",
            Self::Holders => "token holders data",
            Self::Traders => "top traders data",
            Self::Trade => "trade data",
        }
    }

    /// Success line printed after the fetch completes.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Pool => "Pool data fetched successfully!",
            Self::MarketCap => "Market cap data fetched successfully!",
            Self::Holders => "Token holders data fetched successfully!",
            Self::Traders => "Top traders data fetched successfully!",
            Self::Trade => "Trade data fetched successfully!",
        }
    }
}

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The data source call failed.
    #[error("Error fetching {}: {source}", .action.subject())]
    Fetch {
        /// What was being fetched.
        action: Action,
        /// Underlying failure.
        source: SourceError,
    },

    /// `--mint` was given but is not a valid address.
    #[error("Error: {0}")]
    InvalidMint(#[from] MintError),

    /// The interactive prompt could not read a mint address.
    #[error("Error reading mint address: {0}")]
    Prompt(#[source] io::Error),

    /// The client could not be configured.
    #[error("Error: {0}")]
    Config(#[from] SourceError),

    /// Writing results to stdout failed.
    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    /// Wrap a source failure for `action`.
    #[must_use]
    pub fn fetch(action: Action, source: SourceError) -> Self {
        Self::Fetch { action, source }
    }

    /// The colored prefix printed before the message.
    #[must_use]
    pub fn heading(&self) -> String {
        match self {
            Self::Fetch { action, .. } => format!("Error fetching {}:", action.subject()),
            Self::Prompt(_) => "Error reading mint address:".to_owned(),
            Self::InvalidMint(_) | Self::Config(_) => "Error:".to_owned(),
            Self::Output(_) => "Error writing output:".to_owned(),
        }
    }

    /// The underlying message, or [`UNKNOWN_ERROR`] when it is blank.
    #[must_use]
    pub fn message(&self) -> String {
        let message = match self {
            Self::Fetch { source, .. } | Self::Config(source) => source.to_string(),
            Self::InvalidMint(e) => e.to_string(),
            Self::Prompt(e) | Self::Output(e) => e.to_string(),
        };
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_owned()
        } else {
            message
        }
    }

    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch { source, .. } | Self::Config(source) => source.code(),
            Self::Prompt(_) => "mint_required",
            Self::InvalidMint(_) => "invalid_mint",
            Self::Output(_) => "output_error",
        }
    }

    /// Return the process exit code for this error.
    ///
    /// 2 matches clap's usage errors (missing or bad input); everything
    /// else is 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Prompt(_) | Self::InvalidMint(_) => 2,
            Self::Fetch { .. } | Self::Config(_) | Self::Output(_) => 1,
        }
    }
}
