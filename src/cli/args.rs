/// CLI argument definitions via clap derive.
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::source::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

/// agent-mint — query Solana token data from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "agent-mint",
    about = "CLI framework for interacting with Solana blockchain data",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Token-data service base URL.
    #[arg(
        long,
        global = true,
        env = "AGENT_MINT_API_URL",
        value_name = "URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: Url,

    /// API key sent with every request.
    #[arg(
        long,
        global = true,
        env = "AGENT_MINT_API_KEY",
        value_name = "KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(
        long,
        global = true,
        env = "AGENT_MINT_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout: u64,

    /// Output format.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "json")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log request details to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Help to print after a usage error.
///
/// This is the help of the subcommand named in `args`, or the top-level
/// help if none is named. Returns `None` for help and version requests and
/// for errors whose message already is the help.
#[must_use]
pub fn help_after_error(err: &clap::Error, args: &[String]) -> Option<String> {
    if !err.use_stderr() || err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand {
        return None;
    }

    let mut cmd = Cli::command();
    cmd.build();
    let named = args
        .iter()
        .skip(1)
        .find_map(|arg| cmd.find_subcommand(arg).cloned());
    let mut target = named.unwrap_or(cmd);
    Some(target.render_help().to_string())
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Status lines followed by pretty-printed JSON.
    #[default]
    Json,
    /// Single-line JSON only, no status lines.
    Compact,
    /// Status lines followed by an aligned table.
    Table,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get pool data for a Solana token.
    Pool(MintArgs),
    /// Get market cap data for a Solana token.
    Market(MintArgs),
    /// Get token holders data for a Solana token.
    Holders(HoldersArgs),
    /// Get top traders data for a Solana token.
    Traders(TradersArgs),
    /// Get trade data for a Solana token.
    Trade(MintArgs),
}

/// Arguments shared by every subcommand.
#[derive(Debug, Args)]
pub struct MintArgs {
    /// Solana token mint address. Prompted for when omitted.
    #[arg(short, long, value_name = "ADDRESS")]
    pub mint: Option<String>,
}

/// Arguments for `agent-mint holders`.
#[derive(Debug, Args)]
pub struct HoldersArgs {
    #[command(flatten)]
    pub target: MintArgs,

    /// Maximum number of holders to return.
    #[arg(
        short,
        long,
        value_name = "NUMBER",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: u32,
}

/// Arguments for `agent-mint traders`.
#[derive(Debug, Args)]
pub struct TradersArgs {
    #[command(flatten)]
    pub target: MintArgs,

    /// Maximum number of traders to return.
    #[arg(
        short,
        long,
        value_name = "NUMBER",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: u32,
}
