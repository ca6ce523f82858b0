//! Buyer lookup implementations.
//!
//! Only the static placeholder exists today. A real implementation needs a
//! block-explorer (Etherscan, BscScan) or DEX-subgraph integration behind
//! the same [`BuyerLookup`] port.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::Buyer;
use crate::error::Result;
use crate::port::outbound::buyers::BuyerLookup;

/// Placeholder lookup returning two fabricated wallet/amount pairs
/// regardless of token.
///
/// Output is illustrative only.
pub struct StaticBuyerLookup;

#[async_trait]
impl BuyerLookup for StaticBuyerLookup {
    async fn top_buyers(&self, _token: &str) -> Result<Vec<Buyer>> {
        Ok(vec![
            Buyer {
                wallet: "0x123...abc".to_string(),
                amount: Decimal::from(1000),
            },
            Buyer {
                wallet: "0x456...def".to_string(),
                amount: Decimal::from(800),
            },
        ])
    }
}
