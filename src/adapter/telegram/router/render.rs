//! Canonical user-facing texts and list formatting.

use crate::domain::smart_money::SmartMoneyRow;
use crate::domain::{Buyer, CoinMarket, TokenRecord, UserId};
use rust_decimal::Decimal;

use super::super::command::{command_help, CommandParseError};
use super::super::format::escape_markdown;

pub const WELCOME: &str = "Welcome to ChainEye Bot! 👋\n\n\
    I can help you with:\n\
    • Getting alpha insights\n\
    • Managing your subscription\n\n\
    Use /help to see all available commands.";

pub const SUBSCRIBED: &str =
    "Successfully subscribed! You now have access to premium features. 🎉";
pub const ALREADY_SUBSCRIBED: &str = "You are already subscribed! 🎉";
pub const SUBSCRIBE_PROMPT: &str = "Subscribe to get daily alpha. Use /subscribe.";

pub const ALPHA_ACK: &str = "🔍 Generating today's high-signal crypto trading insight...";
pub const ALPHA_FAILED: &str = "❌ Sorry, I could not generate an alpha insight at this time.";

pub const NOT_AUTHORIZED: &str = "❌ You are not authorized to use this command.";
pub const NO_SUBSCRIBERS: &str = "No users are currently subscribed.";
pub const BROADCAST_ACK: &str = "Broadcasting alpha insight to all subscribers...";
pub const BROADCAST_FAILED: &str = "❌ Failed to generate alpha insight.";

pub const MARKET_ACK: &str = "Fetching top 5 gainers in the last 24h...";
pub const MARKET_FAILED: &str = "Failed to fetch market data.";

pub const SMARTMONEY_ACK: &str =
    "Scanning for smart money wallets (this may take a few seconds)...";
pub const SMARTMONEY_NONE: &str = "No smart money wallets found at this time.";
pub const SMARTMONEY_FAILED: &str = "Failed to scan for smart money wallets.";

pub const NEWTOKENS_NONE: &str = "No new tokens found for your criteria.";
pub const NEWTOKENS_FAILED: &str =
    "Failed to fetch new tokens. Please check your chain and try again.";

pub const TOPTRADERS_NO_SELECTION: &str = "Please use /newtokens first to select a token.";
pub const TOPTRADERS_BAD_INDEX: &str =
    "Please provide a valid token number from the last /newtokens list.";
pub const TOPTRADERS_EMPTY: &str = "No trader data available for this token (placeholder).";
pub const TOPTRADERS_FAILED: &str = "Failed to fetch top traders.";

pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";

#[must_use]
pub fn my_id(caller: &UserId) -> String {
    format!("Your Telegram user ID is: {caller}")
}

#[must_use]
pub fn invalid_command(err: &CommandParseError) -> String {
    format!("Invalid command: {err}\n\n{}", command_help())
}

#[must_use]
pub fn broadcast_message(insight: &str) -> String {
    format!("📢 Alpha Insight Broadcast:\n\n{insight}")
}

#[must_use]
pub fn broadcast_complete(delivered: usize) -> String {
    format!("Broadcast complete. Sent to {delivered} users.")
}

#[must_use]
pub fn newtokens_ack(chain: &str, hours: i64) -> String {
    format!("Fetching new tokens on {chain} in the last {hours} hours...")
}

#[must_use]
pub fn toptraders_ack(token: &TokenRecord) -> String {
    format!(
        "Fetching top traders for {} ({})...",
        token.name, token.symbol
    )
}

/// Top-gainer listing for `/market`: rank, name, symbol, price, change.
#[must_use]
pub fn gainers(coins: &[CoinMarket]) -> String {
    coins
        .iter()
        .enumerate()
        .map(|(i, coin)| {
            format!(
                "{}. {} ({})\n   Price: ${}\n   24h Change: {:.2}%",
                i + 1,
                coin.name,
                coin.symbol.to_uppercase(),
                coin.price,
                coin.change_or_zero()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Smart-money result rows for `/smartmoney`.
#[must_use]
pub fn smart_money(rows: &[SmartMoneyRow]) -> String {
    let formatted = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            format!(
                "{}. Wallet: {}\nToken: {} ({})\n24h Change: {:.2}%\nAmount: {}",
                i + 1,
                row.wallet,
                row.token,
                row.symbol.to_uppercase(),
                row.change_24h,
                row.amount
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Smart Money Wallets:\n\n{formatted}")
}

/// MarkdownV2 listing for `/newtokens`, capped at the display limit.
#[must_use]
pub fn new_tokens(chain: &str, hours: i64, tokens: &[TokenRecord], limit: usize) -> String {
    let entries = tokens
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, token)| {
            format!(
                "{}\\. {} \\({}\\)\nPrice: ${}\nLiquidity: ${}\n[View on GeckoTerminal]({})",
                i + 1,
                escape_markdown(&token.name),
                escape_markdown(&token.symbol),
                escape_markdown(&display_usd(token.price_usd)),
                escape_markdown(&display_usd(token.liquidity_usd)),
                token.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "*New Tokens on {} \\(last {hours}h\\):*\n\n{entries}",
        escape_markdown(chain)
    )
}

/// Buyer rows for `/toptraders`.
#[must_use]
pub fn top_traders(token: &TokenRecord, buyers: &[Buyer]) -> String {
    let formatted = buyers
        .iter()
        .enumerate()
        .map(|(i, buyer)| format!("{}. Wallet: {}\nAmount: {}", i + 1, buyer.wallet, buyer.amount))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Top Traders for {} ({}):\n\n{formatted}",
        token.name, token.symbol
    )
}

fn display_usd(value: Option<Decimal>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}
