//! Command routing: authorization gates, handler dispatch, and the two
//! in-process mutable collections behind their store ports.

mod dispatch;
pub mod render;


use std::collections::HashSet;
use std::sync::Arc;

use crate::app::scanner::SmartMoneyScanner;
use crate::domain::UserId;
use crate::port::outbound::buyers::BuyerLookup;
use crate::port::outbound::discovery::TokenDiscovery;
use crate::port::outbound::insight::InsightGenerator;
use crate::port::outbound::market::MarketData;
use crate::port::outbound::messenger::Messenger;
use crate::port::outbound::store::{SelectionStore, SubscriberStore};

/// Page size requested from the market listing for `/market`.
const MARKET_PAGE: u32 = 100;

/// Number of gainers shown by `/market`.
const GAINER_LIMIT: usize = 5;

/// Maximum `/newtokens` entries rendered; the cache keeps the full list.
const TOKEN_DISPLAY_LIMIT: usize = 10;

/// Defaults applied when `/newtokens` arguments are omitted.
#[derive(Debug, Clone)]
pub struct DiscoveryDefaults {
    pub chain: String,
    pub hours: i64,
}

/// Injected router dependencies.
pub struct RouterDeps {
    pub insight: Arc<dyn InsightGenerator>,
    pub market: Arc<dyn MarketData>,
    pub discovery: Arc<dyn TokenDiscovery>,
    pub buyers: Arc<dyn BuyerLookup>,
    pub scanner: Arc<SmartMoneyScanner>,
    pub subscribers: Arc<dyn SubscriberStore>,
    pub selections: Arc<dyn SelectionStore>,
    pub messenger: Arc<dyn Messenger>,
}

/// Maps chat commands to handlers and owns the subscriber/selection state.
pub struct Router {
    insight: Arc<dyn InsightGenerator>,
    market: Arc<dyn MarketData>,
    discovery: Arc<dyn TokenDiscovery>,
    buyers: Arc<dyn BuyerLookup>,
    scanner: Arc<SmartMoneyScanner>,
    subscribers: Arc<dyn SubscriberStore>,
    selections: Arc<dyn SelectionStore>,
    messenger: Arc<dyn Messenger>,
    admins: HashSet<UserId>,
    defaults: DiscoveryDefaults,
}

impl Router {
    #[must_use]
    pub fn new(deps: RouterDeps, admins: HashSet<UserId>, defaults: DiscoveryDefaults) -> Self {
        Self {
            insight: deps.insight,
            market: deps.market,
            discovery: deps.discovery,
            buyers: deps.buyers,
            scanner: deps.scanner,
            subscribers: deps.subscribers,
            selections: deps.selections,
            messenger: deps.messenger,
            admins,
            defaults,
        }
    }
}
