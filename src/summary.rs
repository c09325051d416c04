/// Field-level summaries of each result, as printed by the usage demo.
use std::io::{self, Write};

use crate::types::{
    MarketCapData, PoolData, Scalar, TokenHoldersData, TokenTradeData, TopTradersData,
};

/// Number of address characters kept by [`short_address`].
const SHORT_ADDRESS_CHARS: usize = 8;

/// Shown for fields the service left out.
const MISSING: &str = "n/a";

/// First eight characters of an address followed by `...`.
#[must_use]
pub fn short_address(address: &str) -> String {
    let prefix: String = address.chars().take(SHORT_ADDRESS_CHARS).collect();
    format!("{prefix}...")
}

fn opt(value: Option<&Scalar>) -> String {
    value.map_or_else(|| MISSING.to_owned(), ToString::to_string)
}

fn opt_text(value: Option<&String>) -> &str {
    value.map_or(MISSING, String::as_str)
}

fn opt_address(value: Option<&String>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |a| short_address(a))
}

/// Write a heading underlined with dashes.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_heading(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

/// Whether a pool exists, then its DEX, liquidity and the token price.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_pool(out: &mut dyn Write, data: &PoolData) -> io::Result<()> {
    writeln!(out, "Pool found: {}", data.pool_found)?;
    if let Some(pool) = &data.pool {
        let dex = pool.dex.as_ref().and_then(|d| d.protocol_name.as_ref());
        let liquidity = pool.liquidity.as_ref().and_then(|l| l.quote_amount_usd.as_ref());
        writeln!(out, "DEX: {}", opt_text(dex))?;
        writeln!(out, "Liquidity (USD): {}", opt(liquidity))?;
    }
    writeln!(out, "Price: {}", opt(data.price.as_ref()))
}

/// Token name and symbol, market cap and supply.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_market_cap(out: &mut dyn Write, data: &MarketCapData) -> io::Result<()> {
    let token = data.token.as_ref();
    writeln!(
        out,
        "Token: {} ({})",
        opt_text(token.and_then(|t| t.name.as_ref())),
        opt_text(token.and_then(|t| t.symbol.as_ref()))
    )?;
    writeln!(out, "Market Cap: {}", opt(data.market_cap.as_ref()))?;
    writeln!(out, "Token Supply: {}", opt(data.token_supply.as_ref()))
}

/// Holder count, then each listed holder with a shortened address.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_holders(out: &mut dyn Write, data: &TokenHoldersData) -> io::Result<()> {
    let holders = data.top_holders.as_deref().unwrap_or_default();
    writeln!(out, "Total Holders: {}", opt(data.total_holders.as_ref()))?;
    writeln!(out, "Top {} Holders:", holders.len())?;
    for (i, holder) in holders.iter().enumerate() {
        writeln!(out, "  {}. Address: {}", i + 1, opt_address(holder.address.as_ref()))?;
        writeln!(out, "     Balance: {}", opt(holder.balance.as_ref()))?;
        writeln!(out, "     Percentage: {}", opt(holder.percentage.as_ref()))?;
    }
    Ok(())
}

/// Trader count, then each listed trader with a shortened address.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_traders(out: &mut dyn Write, data: &TopTradersData) -> io::Result<()> {
    let traders = data.traders.as_deref().unwrap_or_default();
    writeln!(out, "Trader Count: {}", opt(data.trader_count.as_ref()))?;
    writeln!(out, "Top {} Traders:", traders.len())?;
    for (i, trader) in traders.iter().enumerate() {
        writeln!(out, "  {}. Address: {}", i + 1, opt_address(trader.address.as_ref()))?;
        writeln!(out, "     Volume: {}", opt(trader.volume.as_ref()))?;
        writeln!(out, "     Volume USD: {}", opt(trader.volume_usd.as_ref()))?;
    }
    Ok(())
}

/// Whether a trade was found, then its time, price, amount and volume.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_trade(out: &mut dyn Write, data: &TokenTradeData) -> io::Result<()> {
    writeln!(out, "Trade Found: {}", data.trade_found)?;
    if let Some(trade) = &data.trade {
        writeln!(out, "Time: {}", opt(trade.time.as_ref()))?;
        writeln!(out, "Price: {}", opt(trade.price.as_ref()))?;
        writeln!(out, "Amount: {}", opt(trade.amount.as_ref()))?;
        writeln!(out, "Volume: {}", opt(trade.volume.as_ref()))?;
    }
    Ok(())
}
