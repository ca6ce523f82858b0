//! CoinGecko API payloads.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::CoinMarket;

/// One entry from `/coins/markets`.
#[derive(Debug, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
}

impl From<MarketCoin> for CoinMarket {
    fn from(coin: MarketCoin) -> Self {
        Self {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            price: coin.current_price.unwrap_or_default(),
            change_24h: coin.price_change_percentage_24h,
        }
    }
}
