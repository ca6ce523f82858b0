//! CoinGecko market-listing client.

mod client;
mod dto;

pub use client::CoinGecko;
