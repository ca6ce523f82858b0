//! Chain name resolution.
//!
//! User-facing chain names map through a fixed, case-insensitive alias
//! table to the discovery provider's network keys. Unmapped names are a
//! hard error rather than a silent fallback.

use std::fmt;

use crate::error::Error;

/// A discovery-provider network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Eth,
    Bsc,
    Polygon,
    Solana,
    Arbitrum,
    Base,
    Avalanche,
    Optimism,
}

impl Network {
    /// Resolve a user-supplied chain name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChain`] for names outside the alias
    /// table.
    pub fn resolve(name: &str) -> Result<Self, Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "eth" | "ethereum" => Ok(Self::Eth),
            "bsc" | "bnb" | "binance" => Ok(Self::Bsc),
            "matic" | "polygon" => Ok(Self::Polygon),
            "sol" | "solana" => Ok(Self::Solana),
            "arb" | "arbitrum" => Ok(Self::Arbitrum),
            "base" => Ok(Self::Base),
            "avax" | "avalanche" => Ok(Self::Avalanche),
            "op" | "optimism" => Ok(Self::Optimism),
            _ => Err(Error::UnsupportedChain(name.to_string())),
        }
    }

    /// Provider network key used in discovery API paths and display URLs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Eth => "eth",
            Self::Bsc => "bsc",
            Self::Polygon => "polygon",
            Self::Solana => "solana",
            Self::Arbitrum => "arbitrum",
            Self::Base => "base",
            Self::Avalanche => "avax",
            Self::Optimism => "optimism",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
