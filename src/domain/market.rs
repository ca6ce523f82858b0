//! Market listing types and gainer ordering.

use rust_decimal::Decimal;

/// One coin from the market listing, with 24h change data.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinMarket {
    /// Provider identifier, used as the key for downstream lookups.
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    /// 24h percentage change. Absent for thinly traded listings.
    pub change_24h: Option<Decimal>,
}

impl CoinMarket {
    /// 24h change with absent values treated as zero for ordering.
    #[must_use]
    pub fn change_or_zero(&self) -> Decimal {
        self.change_24h.unwrap_or(Decimal::ZERO)
    }
}

/// Order coins descending by 24h change and keep the top `limit`.
///
/// A missing change sorts as zero rather than excluding the coin.
#[must_use]
pub fn rank_gainers(mut coins: Vec<CoinMarket>, limit: usize) -> Vec<CoinMarket> {
    coins.sort_by(|a, b| b.change_or_zero().cmp(&a.change_or_zero()));
    coins.truncate(limit);
    coins
}
