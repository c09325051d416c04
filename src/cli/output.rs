/// Output formatting: status lines, JSON and table rendering, error output.
use std::io::{self, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use console::style;
use serde::Serialize;

use super::args::OutputFormat;
use crate::commands::CliError;
use crate::types::{
    ErrorDetail, ErrorOutput, MarketCapData, PoolData, Scalar, TokenHoldersData, TokenTradeData,
    TopTradersData,
};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }

    /// Whether human-oriented status lines are printed.
    fn chatty(&self) -> bool {
        self.format != OutputFormat::Compact
    }

    /// Print the yellow "Fetching ..." line.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn pending(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        if self.chatty() {
            writeln!(out, "{}", style(message).yellow())?;
        }
        Ok(())
    }

    /// Print the green success line.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn success(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        if self.chatty() {
            writeln!(out, "{}", style(message).green())?;
        }
        Ok(())
    }

    /// Print a response body as JSON: pretty under a "Response:" heading,
    /// or on one line in compact mode. The body is written as received.
    ///
    /// # Errors
    ///
    /// Returns any error from serializing or writing to `out`.
    pub fn write_json<T: Serialize + ?Sized>(&self, out: &mut dyn Write, value: &T) -> io::Result<()> {
        if self.format == OutputFormat::Compact {
            serde_json::to_writer(&mut *out, value)?;
            writeln!(out)
        } else {
            writeln!(out, "{}", style("Response:").cyan())?;
            write_json_pretty(out, value)
        }
    }

    /// Print a typed view as a table.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_table<T: Tabular + ?Sized>(&self, out: &mut dyn Write, value: &T) -> io::Result<()> {
        write_table(out, value, self.no_header)
    }
}

// --- JSON ---

fn write_json_pretty<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

// --- Tables ---

/// A result that can be rendered as a table.
pub trait Tabular {
    /// Column headers.
    fn headers(&self) -> Vec<&'static str>;
    /// Table rows, one string per column.
    fn rows(&self) -> Vec<Vec<String>>;
    /// Optional line printed under the table.
    fn footer(&self) -> Option<String> {
        None
    }
}

fn write_table<T: Tabular + ?Sized>(out: &mut dyn Write, value: &T, no_header: bool) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !no_header {
        table.set_header(value.headers().into_iter().map(Cell::new));
    }
    for row in value.rows() {
        table.add_row(row);
    }
    writeln!(out, "{table}")?;
    if let Some(footer) = value.footer() {
        writeln!(out, "{footer}")?;
    }
    Ok(())
}

fn cell(value: Option<&Scalar>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_owned()
}

impl Tabular for PoolData {
    fn headers(&self) -> Vec<&'static str> {
        vec!["POOL FOUND", "DEX", "LIQUIDITY (USD)", "PRICE"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let pool = self.pool.as_ref();
        let dex = pool.and_then(|p| p.dex.as_ref()).and_then(|d| d.protocol_name.as_ref());
        let liquidity = pool
            .and_then(|p| p.liquidity.as_ref())
            .and_then(|l| l.quote_amount_usd.as_ref());
        vec![vec![
            yes_no(self.pool_found),
            text(dex),
            cell(liquidity),
            cell(self.price.as_ref()),
        ]]
    }
}

impl Tabular for MarketCapData {
    fn headers(&self) -> Vec<&'static str> {
        vec!["NAME", "SYMBOL", "MARKET CAP", "SUPPLY"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let token = self.token.as_ref();
        vec![vec![
            text(token.and_then(|t| t.name.as_ref())),
            text(token.and_then(|t| t.symbol.as_ref())),
            cell(self.market_cap.as_ref()),
            cell(self.token_supply.as_ref()),
        ]]
    }
}

impl Tabular for TokenHoldersData {
    fn headers(&self) -> Vec<&'static str> {
        vec!["#", "ADDRESS", "BALANCE", "PERCENTAGE"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.top_holders
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, h)| {
                vec![
                    (i + 1).to_string(),
                    text(h.address.as_ref()),
                    cell(h.balance.as_ref()),
                    cell(h.percentage.as_ref()),
                ]
            })
            .collect()
    }

    fn footer(&self) -> Option<String> {
        self.total_holders
            .as_ref()
            .map(|total| format!("Total holders: {total}"))
    }
}

impl Tabular for TopTradersData {
    fn headers(&self) -> Vec<&'static str> {
        vec!["#", "ADDRESS", "VOLUME", "VOLUME (USD)"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.traders
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, t)| {
                vec![
                    (i + 1).to_string(),
                    text(t.address.as_ref()),
                    cell(t.volume.as_ref()),
                    cell(t.volume_usd.as_ref()),
                ]
            })
            .collect()
    }

    fn footer(&self) -> Option<String> {
        self.trader_count
            .as_ref()
            .map(|count| format!("Trader count: {count}"))
    }
}

impl Tabular for TokenTradeData {
    fn headers(&self) -> Vec<&'static str> {
        vec!["TRADE FOUND", "TIME", "PRICE", "AMOUNT", "VOLUME"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut row = vec![yes_no(self.trade_found)];
        match &self.trade {
            Some(t) => row.extend([
                cell(t.time.as_ref()),
                cell(t.price.as_ref()),
                cell(t.amount.as_ref()),
                cell(t.volume.as_ref()),
            ]),
            None => row.extend(std::iter::repeat_n(String::new(), 4)),
        }
        vec![row]
    }
}

// --- Error output ---

/// Write a command failure to `err_out` (stderr in the binary).
///
/// Compact mode emits a single-line JSON envelope; every other mode prints a
/// red heading followed by the message.
pub fn write_error(err_out: &mut dyn Write, err: &CliError, format: OutputFormat, json_flag: bool) {
    let message = err.message();
    if resolve_format(format, json_flag) == OutputFormat::Compact {
        let envelope = ErrorOutput {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message,
            },
        };
        let s = serde_json::to_string(&envelope).unwrap_or_default();
        let _ = writeln!(err_out, "{s}");
    } else {
        let _ = writeln!(
            err_out,
            "{} {message}",
            style(err.heading()).red().for_stderr()
        );
    }
}
