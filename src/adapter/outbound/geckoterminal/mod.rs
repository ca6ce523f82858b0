//! GeckoTerminal new-pools discovery client.

mod client;
mod dto;

pub use client::GeckoTerminal;
