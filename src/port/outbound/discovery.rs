//! Token discovery port.

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::{Network, TokenRecord};
use crate::error::Result;

/// Client for a pools/newest listing endpoint per supported network.
///
/// Only the provider's single "newest" page is considered: results are
/// bounded by provider page size, not by the full set of tokens created in
/// the window.
#[async_trait]
pub trait TokenDiscovery: Send + Sync {
    /// Fetch tokens created within `window` on `network`, newest first.
    async fn new_tokens(&self, network: Network, window: Duration) -> Result<Vec<TokenRecord>>;
}
