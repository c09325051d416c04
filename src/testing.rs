//! Test doubles shared by the unit tests.
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::mint::MintAddress;
use crate::prompt::Prompter;
use crate::source::{MintDataSource, SourceError, SourceResult};
use crate::types::{
    MarketCapData, Payload, PoolData, TokenHoldersData, TokenTradeData, TopTradersData,
};

/// Prompter that replays fixed answers and records what it was asked.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        self.questions.push(message.to_owned());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }

    fn reject(&mut self, reason: &str) {
        self.rejections.push(reason.to_owned());
    }
}

/// One recorded accessor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Pool(String),
    MarketCap(String),
    Holders(String, u32),
    Traders(String, u32),
    Trade(String),
}

/// In-memory `MintDataSource` that records calls and returns canned data.
#[derive(Default)]
pub struct MockSource {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<String>,
    body: Option<Value>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every accessor fails with a `Status` error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    /// Every accessor answers with `body` instead of the samples.
    pub fn returning(body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> SourceResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(SourceError::Status {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn answer<T>(&self, sample: impl FnOnce() -> Payload<T>) -> Payload<T> {
        self.body.clone().map_or_else(sample, Payload::new)
    }
}

pub fn sample_pool() -> Payload<PoolData> {
    Payload::new(json!({
        "poolFound": true,
        "pool": {
            "address": "Czfq3xZZDmsdGdUyrNLtRhGc47cXcZtLG4crryfu44zE",
            "dex": { "protocolName": "Orca Whirlpool" },
            "liquidity": { "quoteAmountUsd": 2_500_000.25 }
        },
        "price": 1.0002
    }))
}

pub fn sample_market_cap() -> Payload<MarketCapData> {
    Payload::new(json!({
        "token": { "name": "USD Coin", "symbol": "USDC" },
        "marketCap": 9_000_000_000_u64,
        "tokenSupply": "8999000000.5"
    }))
}

pub fn sample_holders(limit: u32) -> Payload<TokenHoldersData> {
    let holders: Vec<_> = (0..limit)
        .map(|i| {
            json!({
                "address": format!("Holder{i}xxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"),
                "balance": 1000 - i,
                "percentage": 10.5 - f64::from(i)
            })
        })
        .collect();
    Payload::new(json!({ "totalHolders": 1234, "topHolders": holders }))
}

pub fn sample_traders(limit: u32) -> Payload<TopTradersData> {
    let traders: Vec<_> = (0..limit)
        .map(|i| {
            json!({
                "address": format!("Trader{i}xxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"),
                "volume": 500 + i,
                "volumeUsd": 499.5 + f64::from(i)
            })
        })
        .collect();
    Payload::new(json!({ "traderCount": 77, "traders": traders }))
}

pub fn sample_trade() -> Payload<TokenTradeData> {
    Payload::new(json!({
        "tradeFound": true,
        "trade": {
            "time": "2024-05-01T12:00:00Z",
            "price": 1.0001,
            "amount": 250,
            "volume": 250.025
        }
    }))
}

#[async_trait]
impl MintDataSource for MockSource {
    async fn pool_data(&self, mint: &MintAddress) -> SourceResult<Payload<PoolData>> {
        self.record(Call::Pool(mint.to_string()))?;
        Ok(self.answer(sample_pool))
    }

    async fn market_cap(&self, mint: &MintAddress) -> SourceResult<Payload<MarketCapData>> {
        self.record(Call::MarketCap(mint.to_string()))?;
        Ok(self.answer(sample_market_cap))
    }

    async fn token_holders(
        &self,
        mint: &MintAddress,
        limit: u32,
    ) -> SourceResult<Payload<TokenHoldersData>> {
        self.record(Call::Holders(mint.to_string(), limit))?;
        Ok(self.answer(|| sample_holders(limit)))
    }

    async fn top_traders(
        &self,
        mint: &MintAddress,
        limit: u32,
    ) -> SourceResult<Payload<TopTradersData>> {
        self.record(Call::Traders(mint.to_string(), limit))?;
        Ok(self.answer(|| sample_traders(limit)))
    }

    async fn token_trade_data(
        &self,
        mint: &MintAddress,
    ) -> SourceResult<Payload<TokenTradeData>> {
        self.record(Call::Trade(mint.to_string()))?;
        Ok(self.answer(sample_trade))
    }
}
