//! Smart-money scanning service.
//!
//! Crosses strong 24h gainers with the buyer lookup into flat result rows.
//! Output is heuristic: with the placeholder buyer lookup it is
//! illustrative, not production-accurate.

use std::sync::Arc;

use crate::domain::smart_money::{cross, strong_gainers, SmartMoneyRow};
use crate::error::Result;
use crate::port::outbound::buyers::BuyerLookup;
use crate::port::outbound::market::MarketData;

/// Page size for the gainer listing feeding the scan.
const SCAN_PAGE: u32 = 50;

/// Scans for wallets buying into tokens with large recent gains.
pub struct SmartMoneyScanner {
    market: Arc<dyn MarketData>,
    buyers: Arc<dyn BuyerLookup>,
}

impl SmartMoneyScanner {
    #[must_use]
    pub fn new(market: Arc<dyn MarketData>, buyers: Arc<dyn BuyerLookup>) -> Self {
        Self { market, buyers }
    }

    /// Run one scan: top gainers, threshold filter, buyer cross.
    ///
    /// # Errors
    ///
    /// Propagates market-listing or buyer-lookup failures.
    pub async fn scan(&self) -> Result<Vec<SmartMoneyRow>> {
        let coins = self.market.top_by_change(SCAN_PAGE).await?;
        let gainers = strong_gainers(coins);

        let mut rows = Vec::new();
        for token in &gainers {
            let buyers = self.buyers.top_buyers(&token.id).await?;
            rows.extend(cross(token, &buyers));
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Buyer, CoinMarket};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct StubMarket {
        coins: Vec<CoinMarket>,
    }

    #[async_trait]
    impl MarketData for StubMarket {
        async fn top_by_market_cap(&self, _limit: u32) -> Result<Vec<CoinMarket>> {
            Ok(self.coins.clone())
        }

        async fn top_by_change(&self, _limit: u32) -> Result<Vec<CoinMarket>> {
            Ok(self.coins.clone())
        }
    }

    struct StubBuyers;

    #[async_trait]
    impl BuyerLookup for StubBuyers {
        async fn top_buyers(&self, _token: &str) -> Result<Vec<Buyer>> {
            Ok(vec![Buyer {
                wallet: "0xw".into(),
                amount: Decimal::from(10),
            }])
        }
    }

    fn coin(name: &str, change: Decimal) -> CoinMarket {
        CoinMarket {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: name.to_lowercase(),
            price: dec!(1),
            change_24h: Some(change),
        }
    }

    #[tokio::test]
    async fn crosses_only_strong_gainers() {
        let scanner = SmartMoneyScanner::new(
            Arc::new(StubMarket {
                coins: vec![
                    coin("Up", dec!(25)),
                    coin("Flat", dec!(3)),
                    coin("Moon", dec!(120)),
                ],
            }),
            Arc::new(StubBuyers),
        );

        let rows = scanner.scan().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token, "Up");
        assert_eq!(rows[1].token, "Moon");
    }

    #[tokio::test]
    async fn no_qualifying_tokens_yield_no_rows() {
        let scanner = SmartMoneyScanner::new(
            Arc::new(StubMarket {
                coins: vec![coin("Flat", dec!(19))],
            }),
            Arc::new(StubBuyers),
        );

        assert!(scanner.scan().await.unwrap().is_empty());
    }
}
