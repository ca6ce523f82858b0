//! HTTP client for the CoinGecko REST API.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::dto::MarketCoin;
use crate::domain::CoinMarket;
use crate::error::{Error, Result};
use crate::port::outbound::market::MarketData;

/// CoinGecko public API base URL.
const API_URL: &str = "https://api.coingecko.com/api/v3";

/// HTTP client for the CoinGecko market listing.
pub struct CoinGecko {
    http: HttpClient,
    base_url: String,
}

impl CoinGecko {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    /// Point the client at a different base URL (used by tests).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    async fn markets(&self, order: &str, per_page: u32) -> Result<Vec<CoinMarket>> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order={order}&per_page={per_page}&page=1&price_change_percentage=24h",
            self.base_url
        );
        debug!(order, per_page, "fetching market listing");

        let coins = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<Vec<MarketCoin>>()
            .await?;

        Ok(coins.into_iter().map(CoinMarket::from).collect())
    }
}

impl Default for CoinGecko {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketData for CoinGecko {
    async fn top_by_market_cap(&self, limit: u32) -> Result<Vec<CoinMarket>> {
        self.markets("market_cap_desc", limit).await
    }

    async fn top_by_change(&self, limit: u32) -> Result<Vec<CoinMarket>> {
        self.markets("percent_change_24h_desc", limit).await
    }
}
