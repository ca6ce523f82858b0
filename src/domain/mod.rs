//! Exchange-agnostic domain types and pure decision logic.
//!
//! Everything in this module is free of I/O: gainer ordering, the
//! smart-money gain filter, chain alias resolution, and lookback-window
//! membership are all testable without touching a network.

pub mod chain;
pub mod market;
pub mod smart_money;
pub mod token;
pub mod user;

pub use chain::Network;
pub use market::CoinMarket;
pub use smart_money::{Buyer, SmartMoneyRow};
pub use token::TokenRecord;
pub use user::UserId;
