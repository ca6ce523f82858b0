//! GeckoTerminal API payloads.
//!
//! The API follows JSON:API conventions: pool attributes carry prices as
//! decimal strings, and the base token is referenced through a
//! `{network}_{address}` relationship id.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewPoolsResponse {
    #[serde(default)]
    pub data: Vec<Pool>,
}

#[derive(Debug, Deserialize)]
pub struct Pool {
    pub attributes: PoolAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

#[derive(Debug, Deserialize)]
pub struct PoolAttributes {
    /// Pool display name, e.g. `"PEPE / WETH"`.
    pub name: String,
    /// Pool contract address.
    pub address: String,
    pub base_token_price_usd: Option<Decimal>,
    pub reserve_in_usd: Option<Decimal>,
    pub pool_created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct Relationships {
    pub base_token: Option<Relationship>,
}

#[derive(Debug, Deserialize)]
pub struct Relationship {
    pub data: RelationshipRef,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipRef {
    /// Prefixed token id, e.g. `"eth_0xdeadbeef"`.
    pub id: String,
}

impl Pool {
    /// Base token symbol: the part of the pool name before the separator.
    #[must_use]
    pub fn base_symbol(&self) -> &str {
        self.attributes
            .name
            .split(" / ")
            .next()
            .unwrap_or(&self.attributes.name)
            .trim()
    }

    /// Base token contract address with the network prefix stripped.
    #[must_use]
    pub fn base_token_address(&self) -> String {
        self.relationships
            .as_ref()
            .and_then(|r| r.base_token.as_ref())
            .map(|t| {
                t.data
                    .id
                    .split_once('_')
                    .map_or(t.data.id.as_str(), |(_, address)| address)
                    .to_string()
            })
            .unwrap_or_default()
    }
}
