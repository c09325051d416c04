/// Token-data source: the accessor trait and its HTTP implementation.
pub mod api;
pub mod config;
pub mod errors;

use async_trait::async_trait;

use crate::mint::MintAddress;
use crate::types::{
    MarketCapData, Payload, PoolData, TokenHoldersData, TokenTradeData, TopTradersData,
};

pub use api::ApiClient;
pub use config::ClientConfig;
pub use errors::{SourceError, SourceResult};

/// The five token-data accessors.
///
/// Each call maps to exactly one request against the backing service; there
/// is no caching or retrying at this layer. Results come back as the body
/// the service sent, readable through the typed view when fields are needed.
#[async_trait]
pub trait MintDataSource: Send + Sync {
    /// Pool data (DEX, liquidity, price) for `mint`.
    async fn pool_data(&self, mint: &MintAddress) -> SourceResult<Payload<PoolData>>;

    /// Market cap and supply for `mint`.
    async fn market_cap(&self, mint: &MintAddress) -> SourceResult<Payload<MarketCapData>>;

    /// Holder count and the `limit` largest holders of `mint`.
    async fn token_holders(
        &self,
        mint: &MintAddress,
        limit: u32,
    ) -> SourceResult<Payload<TokenHoldersData>>;

    /// Trader count and the `limit` most active traders of `mint`.
    async fn top_traders(
        &self,
        mint: &MintAddress,
        limit: u32,
    ) -> SourceResult<Payload<TopTradersData>>;

    /// Most recent trade of `mint`.
    async fn token_trade_data(&self, mint: &MintAddress)
    -> SourceResult<Payload<TokenTradeData>>;
}
