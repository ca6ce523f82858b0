//! HTTP client for the GeckoTerminal REST API.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client as HttpClient;
use tracing::debug;

use super::dto::{NewPoolsResponse, Pool};
use crate::domain::token::within_window;
use crate::domain::{Network, TokenRecord};
use crate::error::{Error, Result};
use crate::port::outbound::discovery::TokenDiscovery;

/// GeckoTerminal public API base URL.
const API_URL: &str = "https://api.geckoterminal.com/api/v2";

/// Base URL for user-facing pool pages.
const SITE_URL: &str = "https://www.geckoterminal.com";

/// HTTP client for the GeckoTerminal newest-pools listing.
pub struct GeckoTerminal {
    http: HttpClient,
    base_url: String,
}

impl GeckoTerminal {
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
}

impl Default for GeckoTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenDiscovery for GeckoTerminal {
    async fn new_tokens(&self, network: Network, window: Duration) -> Result<Vec<TokenRecord>> {
        let url = format!("{}/networks/{}/new_pools", self.base_url, network.key());
        debug!(network = %network, "fetching newest pools");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<NewPoolsResponse>()
            .await?;

        Ok(map_pools(response.data, network, Utc::now(), window))
    }
}

/// Map the newest-pools page to token records created within the window.
///
/// Pools without a creation timestamp are dropped. Only this single page is
/// considered, so results are bounded by provider page size.
fn map_pools(
    pools: Vec<Pool>,
    network: Network,
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<TokenRecord> {
    pools
        .into_iter()
        .filter_map(|pool| {
            let created_at = pool.attributes.pool_created_at?;
            if !within_window(created_at, now, window) {
                return None;
            }

            let symbol = pool.base_symbol().to_string();
            let address = pool.base_token_address();
            let pool_address = pool.attributes.address.clone();
            Some(TokenRecord {
                name: pool.attributes.name.clone(),
                symbol,
                address,
                url: format!("{SITE_URL}/{}/pools/{pool_address}", network.key()),
                pool_address,
                created_at,
                price_usd: pool.attributes.base_token_price_usd,
                liquidity_usd: pool.attributes.reserve_in_usd,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn fixture() -> Vec<Pool> {
        let json = r#"{
            "data": [
                {
                    "attributes": {
                        "name": "PEPE / WETH",
                        "address": "0xpool1",
                        "base_token_price_usd": "0.0000012",
                        "reserve_in_usd": "150000.55",
                        "pool_created_at": "2025-06-01T10:30:00Z"
                    },
                    "relationships": {
                        "base_token": {"data": {"id": "eth_0xtoken1", "type": "token"}}
                    }
                },
                {
                    "attributes": {
                        "name": "OLD / WETH",
                        "address": "0xpool2",
                        "base_token_price_usd": null,
                        "reserve_in_usd": null,
                        "pool_created_at": "2025-05-31T12:00:00Z"
                    },
                    "relationships": {
                        "base_token": {"data": {"id": "eth_0xtoken2", "type": "token"}}
                    }
                },
                {
                    "attributes": {
                        "name": "NOTS / WETH",
                        "address": "0xpool3",
                        "base_token_price_usd": null,
                        "reserve_in_usd": null,
                        "pool_created_at": null
                    }
                }
            ]
        }"#;
        serde_json::from_str::<NewPoolsResponse>(json).unwrap().data
    }

    #[test]
    fn keeps_only_pools_within_window() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let tokens = map_pools(fixture(), Network::Eth, now, Duration::hours(6));

        assert_eq!(tokens.len(), 1);
        let token = &tokens[0];
        assert_eq!(token.symbol, "PEPE");
        assert_eq!(token.address, "0xtoken1");
        assert_eq!(token.pool_address, "0xpool1");
        assert_eq!(token.price_usd, Some(dec!(0.0000012)));
        assert_eq!(token.liquidity_usd, Some(dec!(150000.55)));
        assert_eq!(
            token.url,
            "https://www.geckoterminal.com/eth/pools/0xpool1"
        );
    }

    #[test]
    fn wider_window_includes_older_pools() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let tokens = map_pools(fixture(), Network::Eth, now, Duration::hours(48));

        // The timestampless pool is still dropped.
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let tokens = map_pools(fixture(), Network::Eth, now, Duration::hours(24));

        assert_eq!(tokens.len(), 2);
    }
}
