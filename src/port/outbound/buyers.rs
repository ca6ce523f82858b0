//! Buyer lookup port.

use async_trait::async_trait;

use crate::domain::Buyer;
use crate::error::Result;

/// Looks up the top buyers for a token.
///
/// The production implementation is currently a static placeholder; a real
/// block-explorer or DEX-subgraph integration slots in behind this same
/// trait.
#[async_trait]
pub trait BuyerLookup: Send + Sync {
    async fn top_buyers(&self, token: &str) -> Result<Vec<Buyer>>;
}
