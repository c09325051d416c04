#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! agent-mint — Solana token pool, market cap, holder, trader and trade data.
//!
//! The [`source::MintDataSource`] trait is the data boundary;
//! [`source::ApiClient`] implements it over HTTP. The `agent-mint` binary
//! wraps each accessor in a subcommand, and [`summary`] prints the
//! field-level view used by the usage demo.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod mint;
pub mod prompt;
pub mod source;
pub mod summary;
pub mod types;

#[cfg(test)]
mod testing;

pub use mint::{MintAddress, MintError};
pub use source::{ApiClient, ClientConfig, MintDataSource, SourceError, SourceResult};
pub use types::Payload;
