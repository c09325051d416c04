//! agent-mint — query Solana token data from the command line.

use std::{env, io};

use clap::Parser;
use tracing::debug;

use agent_mint::cli::args::help_after_error;
use agent_mint::cli::{Cli, OutputCtx, write_error};
use agent_mint::commands::{self, CliError, Session};
use agent_mint::prompt::TerminalPrompter;
use agent_mint::source::{ApiClient, ClientConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_on_parse_error(&err),
    };
    agent_mint::logging::init(cli.debug);

    if let Err(err) = run(&cli).await {
        write_error(&mut io::stderr().lock(), &err, cli.output, cli.json);
        std::process::exit(err.exit_code());
    }
}

/// Print a parse failure, followed by the relevant help for usage errors.
fn exit_on_parse_error(err: &clap::Error) -> ! {
    let _ = err.print();
    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if let Some(help) = help_after_error(err, &args) {
        eprintln!("\n{help}");
    }
    std::process::exit(err.exit_code());
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = ClientConfig::new(cli.api_url.clone(), cli.api_key.clone(), cli.timeout)?;
    let client = ApiClient::new(&config)?;
    debug!(api_url = %client.base_url(), "client ready");

    let mut prompter = TerminalPrompter;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session {
        source: &client,
        prompter: &mut prompter,
        out: &mut out,
        ctx: OutputCtx::new(cli.output, cli.json, cli.no_header),
    };

    commands::dispatch(&cli.command, &mut session).await
}
