//! ChainEye - Telegram bot aggregating crypto-market signals.
//!
//! The bot exposes AI-generated trading commentary, market-gainer lists,
//! a smart-money wallet heuristic, and new-token discovery as chat
//! commands, with subscriber-gated access and an admin-only broadcast.
//!
//! # Architecture
//!
//! - [`domain`] - pure types and decision logic: gainer ordering, the
//!   smart-money filter, chain alias resolution, lookback windows
//! - [`port`] - trait seams for everything the bot calls out to
//! - [`adapter`] - OpenAI, CoinGecko, and GeckoTerminal clients, the
//!   in-memory stores, and the Telegram integration (router + transports)
//! - [`app`] - configuration and service wiring
//! - [`error`] - error types for the crate
//!
//! State is intentionally process-local and non-durable: the subscriber
//! registry and per-user token selections reset on restart.
//!
//! # Example
//!
//! ```no_run
//! use chaineye::app::{self, Config};
//! use teloxide::Bot;
//!
//! let config = Config::load("config.toml").unwrap();
//! let bot = Bot::new(&config.telegram.bot_token);
//! let services = app::build(&config, bot).unwrap();
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod port;
