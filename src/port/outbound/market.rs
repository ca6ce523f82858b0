//! Market data port.

use async_trait::async_trait;

use crate::domain::CoinMarket;
use crate::error::Result;

/// Client for a market-listing endpoint with 24h change data.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch up to `limit` coins ordered by market cap descending.
    async fn top_by_market_cap(&self, limit: u32) -> Result<Vec<CoinMarket>>;

    /// Fetch up to `limit` coins ordered by 24h percent change descending.
    async fn top_by_change(&self, limit: u32) -> Result<Vec<CoinMarket>>;
}
