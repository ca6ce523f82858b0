//! Application composition: configuration plus the services that wire
//! adapters into the command router.

pub mod config;
pub mod insight;
pub mod scanner;

pub use config::Config;

use std::sync::Arc;

use teloxide::Bot;

use crate::adapter::outbound::buyers::StaticBuyerLookup;
use crate::adapter::outbound::coingecko::CoinGecko;
use crate::adapter::outbound::geckoterminal::GeckoTerminal;
use crate::adapter::outbound::llm::OpenAi;
use crate::adapter::outbound::memory::{InMemorySelections, InMemorySubscribers};
use crate::adapter::telegram::messenger::TelegramMessenger;
use crate::adapter::telegram::router::{DiscoveryDefaults, Router, RouterDeps};
use crate::error::Result;
use crate::port::outbound::buyers::BuyerLookup;
use crate::port::outbound::market::MarketData;
use crate::port::outbound::messenger::Messenger;

use self::insight::AlphaInsightGenerator;
use self::scanner::SmartMoneyScanner;

/// The wired bot: one router plus the messenger both transports share.
pub struct Services {
    pub router: Arc<Router>,
    pub messenger: Arc<dyn Messenger>,
}

/// Wire production adapters into a router.
///
/// # Errors
///
/// Returns a config error when `OPENAI_API_KEY` is missing.
pub fn build(config: &Config, bot: Bot) -> Result<Services> {
    let llm = Arc::new(OpenAi::from_env(
        config.llm.openai.model.clone(),
        config.llm.openai.max_tokens,
        config.llm.openai.temperature,
    )?);
    let market: Arc<dyn MarketData> = Arc::new(CoinGecko::new());
    let buyers: Arc<dyn BuyerLookup> = Arc::new(StaticBuyerLookup);
    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot));

    let router = Router::new(
        RouterDeps {
            insight: Arc::new(AlphaInsightGenerator::new(llm)),
            market: market.clone(),
            discovery: Arc::new(GeckoTerminal::new()),
            buyers: buyers.clone(),
            scanner: Arc::new(SmartMoneyScanner::new(market, buyers)),
            subscribers: Arc::new(InMemorySubscribers::new()),
            selections: Arc::new(InMemorySelections::new()),
            messenger: messenger.clone(),
        },
        config.telegram.admins.clone(),
        DiscoveryDefaults {
            chain: config.discovery.default_chain.clone(),
            hours: config.discovery.default_hours,
        },
    );

    Ok(Services {
        router: Arc::new(router),
        messenger,
    })
}
