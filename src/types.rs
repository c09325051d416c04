/// Result shapes returned by the token-data service.
///
/// A [`Payload`] keeps the response body exactly as received; the CLI prints
/// that. The typed views below are read from it only where individual fields
/// are needed (tables, summaries), and every field in them is optional so
/// that a partial or oddly-typed response still yields a view.
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A response body as received, tagged with the view it can be read as.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T> {
    raw: Value,
    view: PhantomData<fn() -> T>,
}

impl<T> Payload<T> {
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self {
            raw,
            view: PhantomData,
        }
    }

    /// The body exactly as the service sent it.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }
}

impl<T: DeserializeOwned> Payload<T> {
    /// Read the typed view.
    ///
    /// # Errors
    ///
    /// Returns an error if a present field has an incompatible JSON type
    /// (e.g. a string where a boolean is expected).
    pub fn view(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.raw)
    }
}

impl<T> Serialize for Payload<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// A JSON scalar shown verbatim: numbers keep their original digits,
/// strings are printed unquoted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Scalar(Value);

impl Scalar {
    /// Numeric value, for numbers and numeric strings.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Pool data for a mint: whether a pool exists, its DEX and liquidity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolData {
    pub pool_found: bool,
    pub pool: Option<Pool>,
    pub price: Option<Scalar>,
}

/// A liquidity pool.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pool {
    pub dex: Option<Dex>,
    pub liquidity: Option<Liquidity>,
}

/// The DEX hosting a pool.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dex {
    pub protocol_name: Option<String>,
}

/// Pool liquidity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Liquidity {
    pub quote_amount_usd: Option<Scalar>,
}

/// Market capitalisation and supply of a token.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketCapData {
    pub token: Option<TokenInfo>,
    pub market_cap: Option<Scalar>,
    pub token_supply: Option<Scalar>,
}

/// Token identity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenInfo {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Holder count and the largest holders.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenHoldersData {
    pub total_holders: Option<Scalar>,
    pub top_holders: Option<Vec<Holder>>,
}

/// One token holder.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Holder {
    pub address: Option<String>,
    pub balance: Option<Scalar>,
    pub percentage: Option<Scalar>,
}

/// Trader count and the most active traders.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopTradersData {
    pub trader_count: Option<Scalar>,
    pub traders: Option<Vec<Trader>>,
}

/// One trader.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trader {
    pub address: Option<String>,
    pub volume: Option<Scalar>,
    pub volume_usd: Option<Scalar>,
}

/// Latest trade for a token, if any.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenTradeData {
    pub trade_found: bool,
    pub trade: Option<Trade>,
}

/// A single trade.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trade {
    pub time: Option<Scalar>,
    pub price: Option<Scalar>,
    pub amount: Option<Scalar>,
    pub volume: Option<Scalar>,
}

/// A structured error envelope for machine-readable error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn scalar(s: Option<&Scalar>) -> String {
        s.map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn test_pool_view() {
        let payload: Payload<PoolData> = Payload::new(json!({
            "poolFound": true,
            "pool": {
                "address": "58oQChx4yWmvKdwLLZzBi4ChoCc2fqCUWBkwMihLYQo2",
                "dex": { "protocolName": "Raydium" },
                "liquidity": { "quoteAmountUsd": "1250000.5" }
            },
            "price": 1.0001
        }));
        let data = payload.view().unwrap();

        assert!(data.pool_found);
        let pool = data.pool.unwrap();
        assert_eq!(pool.dex.unwrap().protocol_name.as_deref(), Some("Raydium"));
        let liquidity = pool.liquidity.unwrap().quote_amount_usd;
        assert_eq!(scalar(liquidity.as_ref()), "1250000.5");
        assert_eq!(liquidity.unwrap().as_f64(), Some(1_250_000.5));
        assert_eq!(scalar(data.price.as_ref()), "1.0001");
    }

    #[test]
    fn test_partial_shapes_still_view() {
        let data: PoolData = Payload::new(json!({ "poolFound": true, "pool": { "dex": {} } }))
            .view()
            .unwrap();
        let pool = data.pool.unwrap();
        assert!(pool.liquidity.is_none());
        assert!(data.price.is_none());

        let holders: TokenHoldersData =
            Payload::new(json!({ "totalHolders": "42" })).view().unwrap();
        assert_eq!(scalar(holders.total_holders.as_ref()), "42");
        assert!(holders.top_holders.is_none());
    }

    #[test]
    fn test_null_price_is_none() {
        let data: PoolData = Payload::new(json!({ "poolFound": false, "pool": null, "price": null }))
            .view()
            .unwrap();
        assert!(data.price.is_none());
        assert!(data.pool.is_none());
    }

    #[test]
    fn test_scalars_keep_their_digits() {
        let raw: Value = serde_json::from_str(
            r#"{"totalHolders":2,"topHolders":[{"address":"A","balance":"9007199254740993","percentage":12.50}]}"#,
        )
        .unwrap();
        let data: TokenHoldersData = Payload::new(raw).view().unwrap();
        let holder = &data.top_holders.unwrap()[0];
        assert_eq!(scalar(holder.balance.as_ref()), "9007199254740993");
        assert_eq!(scalar(holder.percentage.as_ref()), "12.50");
        assert_eq!(scalar(data.total_holders.as_ref()), "2");
    }

    #[test]
    fn test_trade_time_number_or_string() {
        let data: TokenTradeData = Payload::new(json!({
            "tradeFound": true,
            "trade": { "time": 1_700_000_000, "price": 1, "amount": 2, "volume": 2 }
        }))
        .view()
        .unwrap();
        assert_eq!(scalar(data.trade.unwrap().time.as_ref()), "1700000000");
    }

    #[test]
    fn test_incompatible_type_fails_view() {
        let payload: Payload<TokenTradeData> = Payload::new(json!({ "tradeFound": "yes" }));
        assert!(payload.view().is_err());
    }

    #[test]
    fn test_payload_serializes_raw_body() {
        let text = r#"{"trade":{"time":1700000000,"amount":2},"tradeFound":true,"extra":[1,"x"]}"#;
        let payload: Payload<TokenTradeData> = Payload::new(serde_json::from_str(text).unwrap());
        assert_eq!(serde_json::to_string(&payload).unwrap(), text);
    }
}
