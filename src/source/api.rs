/// HTTP implementation of [`MintDataSource`].
use std::time::Instant;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use super::MintDataSource;
use super::config::ClientConfig;
use super::errors::{SourceError, SourceResult};
use crate::mint::MintAddress;
use crate::types::{
    MarketCapData, Payload, PoolData, TokenHoldersData, TokenTradeData, TopTradersData,
};

/// Header carrying the API key (`X-API-KEY`).
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the token-data REST service.
///
/// Routes are `{base}/v1/tokens/{mint}/{resource}`; list resources take a
/// `limit` query parameter.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Config` if the API key is not a valid header value,
    /// or `SourceError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> SourceResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| SourceError::Config("API key contains invalid characters".to_owned()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, mint: &MintAddress, resource: &str, limit: Option<u32>) -> SourceResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                SourceError::Config(format!("API URL '{}' cannot be used as a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v1", "tokens", mint.as_str(), resource]);
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        Ok(url)
    }

    async fn get<T>(&self, url: Url) -> SourceResult<Payload<T>> {
        let started = Instant::now();
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "response"
        );

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request rejected");
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        Ok(Payload::new(serde_json::from_str(&body)?))
    }
}

#[async_trait]
impl MintDataSource for ApiClient {
    async fn pool_data(&self, mint: &MintAddress) -> SourceResult<Payload<PoolData>> {
        self.get(self.endpoint(mint, "pool", None)?).await
    }

    async fn market_cap(&self, mint: &MintAddress) -> SourceResult<Payload<MarketCapData>> {
        self.get(self.endpoint(mint, "market-cap", None)?).await
    }

    async fn token_holders(
        &self,
        mint: &MintAddress,
        limit: u32,
    ) -> SourceResult<Payload<TokenHoldersData>> {
        self.get(self.endpoint(mint, "holders", Some(limit))?).await
    }

    async fn top_traders(
        &self,
        mint: &MintAddress,
        limit: u32,
    ) -> SourceResult<Payload<TopTradersData>> {
        self.get(self.endpoint(mint, "traders", Some(limit))?).await
    }

    async fn token_trade_data(
        &self,
        mint: &MintAddress,
    ) -> SourceResult<Payload<TokenTradeData>> {
        self.get(self.endpoint(mint, "trade", None)?).await
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Prefers a JSON `error` or `message` string, then the raw body, then the
/// status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                if !msg.trim().is_empty() {
                    return msg.trim().to_owned();
                }
            }
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_owned();
    }

    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_owned)
}
