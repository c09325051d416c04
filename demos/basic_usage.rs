//! Basic programmatic use of the agent-mint library.
//!
//! Fetches every kind of token data for USDC and prints a few fields of each.
//! Reads `AGENT_MINT_API_URL` / `AGENT_MINT_API_KEY` / `AGENT_MINT_TIMEOUT`
//! (or a `.env` file).
//!
//! ```text
//! cargo run --example basic_usage
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use agent_mint::summary::{
    write_heading, write_holders, write_market_cap, write_pool, write_trade, write_traders,
};
use agent_mint::{ApiClient, ClientConfig, MintAddress, MintDataSource};

/// USDC mint.
const MINT_ADDRESS: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// How many holders and traders to request.
const TOP_N: u32 = 3;

async fn run_examples(source: &dyn MintDataSource, mint: &MintAddress) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Agent Mint SDK - Basic Usage Examples")?;
    writeln!(out, "======================================")?;
    writeln!(out, "Using mint address: {mint}")?;
    writeln!(out)?;

    write_heading(&mut out, "Example 1: Get Pool Data")?;
    let pool = source.pool_data(mint).await.context("pool data")?.view()?;
    write_pool(&mut out, &pool)?;
    writeln!(out)?;

    write_heading(&mut out, "Example 2: Get Market Cap Data")?;
    let market_cap = source
        .market_cap(mint)
        .await
        .context("market cap data")?
        .view()?;
    write_market_cap(&mut out, &market_cap)?;
    writeln!(out)?;

    write_heading(&mut out, "Example 3: Get Token Holders Data")?;
    let holders = source
        .token_holders(mint, TOP_N)
        .await
        .context("token holders data")?
        .view()?;
    write_holders(&mut out, &holders)?;
    writeln!(out)?;

    write_heading(&mut out, "Example 4: Get Top Traders Data")?;
    let traders = source
        .top_traders(mint, TOP_N)
        .await
        .context("top traders data")?
        .view()?;
    write_traders(&mut out, &traders)?;
    writeln!(out)?;

    write_heading(&mut out, "Example 5: Get Token Trade Data")?;
    let trade = source
        .token_trade_data(mint)
        .await
        .context("trade data")?
        .view()?;
    write_trade(&mut out, &trade)?;
    writeln!(out)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    agent_mint::logging::init(false);

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    let mint: MintAddress = MINT_ADDRESS.parse()?;

    if let Err(err) = run_examples(&client, &mint).await {
        eprintln!("Error running examples: {err:#}");
    }
    Ok(())
}
