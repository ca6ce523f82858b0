//! Newly discovered token records.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// Normalized representation of a newly created tradeable asset/pool.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub name: String,
    pub symbol: String,
    /// Contract address of the base token.
    pub address: String,
    /// Address of the pool the token was discovered through.
    pub pool_address: String,
    pub created_at: DateTime<Utc>,
    /// Display URL for the pool on the discovery provider.
    pub url: String,
    pub price_usd: Option<Decimal>,
    pub liquidity_usd: Option<Decimal>,
}

impl TokenRecord {
    /// Key used for buyer lookups: the contract address, falling back to
    /// the pool address when the contract address is unavailable.
    #[must_use]
    pub fn lookup_key(&self) -> &str {
        if self.address.is_empty() {
            &self.pool_address
        } else {
            &self.address
        }
    }
}

/// Whether a creation timestamp falls within the lookback window.
///
/// Inclusive: `now - created_at <= window`.
#[must_use]
pub fn within_window(created_at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    now.signed_duration_since(created_at) <= window
}
