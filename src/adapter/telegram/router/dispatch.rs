use chrono::Duration;
use tracing::{error, warn};

use crate::domain::market::rank_gainers;
use crate::domain::{Network, UserId};
use crate::error::Result;
use crate::port::outbound::messenger::Outgoing;

use super::super::command::{command_help, parse_command, Command, CommandParseError};
use super::{render, Router, GAINER_LIMIT, MARKET_PAGE, TOKEN_DISPLAY_LIMIT};

impl Router {
    /// Parse and dispatch one inbound message text.
    ///
    /// Non-command messages are ignored; unknown commands get a corrective
    /// reply.
    ///
    /// # Errors
    ///
    /// Returns an error when a reply to the caller could not be delivered.
    /// Upstream-API failures never surface here; they degrade to fixed
    /// messages inside the handlers.
    pub async fn handle_text(&self, caller: &UserId, text: &str) -> Result<()> {
        match parse_command(text) {
            Ok(command) => self.dispatch(caller, command).await,
            Err(CommandParseError::NotACommand) => Ok(()),
            Err(err) => self.reply(caller, render::invalid_command(&err)).await,
        }
    }

    async fn dispatch(&self, caller: &UserId, command: Command) -> Result<()> {
        match command {
            Command::Start => self.reply(caller, render::WELCOME).await,
            Command::Help => self.reply(caller, command_help()).await,
            Command::MyId => self.reply(caller, render::my_id(caller)).await,
            Command::Subscribe => self.subscribe(caller).await,
            Command::Alpha => self.alpha(caller).await,
            Command::Broadcast => self.broadcast(caller).await,
            Command::Market => self.market(caller).await,
            Command::SmartMoney => self.smart_money(caller).await,
            Command::NewTokens { chain, hours } => self.new_tokens(caller, chain, hours).await,
            Command::TopTraders { index } => self.top_traders(caller, index).await,
        }
    }

    async fn reply(&self, to: &UserId, text: impl Into<String>) -> Result<()> {
        self.messenger.send(to, &Outgoing::text(text)).await
    }

    async fn subscribe(&self, caller: &UserId) -> Result<()> {
        let newly_added = self.subscribers.insert(caller);
        let response = if newly_added {
            render::SUBSCRIBED
        } else {
            render::ALREADY_SUBSCRIBED
        };
        self.reply(caller, response).await
    }

    async fn alpha(&self, caller: &UserId) -> Result<()> {
        if !self.subscribers.contains(caller) {
            return self.reply(caller, render::SUBSCRIBE_PROMPT).await;
        }

        self.reply(caller, render::ALPHA_ACK).await?;
        match self.insight.generate().await {
            Ok(insight) => self.reply(caller, insight).await,
            Err(_) => self.reply(caller, render::ALPHA_FAILED).await,
        }
    }

    async fn broadcast(&self, caller: &UserId) -> Result<()> {
        if !self.admins.contains(caller) {
            return self.reply(caller, render::NOT_AUTHORIZED).await;
        }
        if self.subscribers.is_empty() {
            return self.reply(caller, render::NO_SUBSCRIBERS).await;
        }

        self.reply(caller, render::BROADCAST_ACK).await?;
        let insight = match self.insight.generate().await {
            Ok(insight) => insight,
            Err(_) => return self.reply(caller, render::BROADCAST_FAILED).await,
        };

        // Each delivery is an isolated failure domain: one rejected send
        // must not abort the batch.
        let message = Outgoing::text(render::broadcast_message(&insight));
        let mut delivered = 0usize;
        for subscriber in self.subscribers.all() {
            match self.messenger.send(&subscriber, &message).await {
                Ok(()) => delivered += 1,
                Err(err) => {
                    warn!(user = %subscriber, error = %err, "broadcast delivery failed");
                }
            }
        }

        self.reply(caller, render::broadcast_complete(delivered)).await
    }

    async fn market(&self, caller: &UserId) -> Result<()> {
        self.reply(caller, render::MARKET_ACK).await?;

        let response = match self.market.top_by_market_cap(MARKET_PAGE).await {
            Ok(coins) => {
                let ranked = rank_gainers(coins, GAINER_LIMIT);
                if ranked.is_empty() {
                    render::MARKET_FAILED.to_string()
                } else {
                    render::gainers(&ranked)
                }
            }
            Err(err) => {
                error!(error = %err, "market listing failed");
                render::MARKET_FAILED.to_string()
            }
        };
        self.reply(caller, response).await
    }

    async fn smart_money(&self, caller: &UserId) -> Result<()> {
        self.reply(caller, render::SMARTMONEY_ACK).await?;

        let response = match self.scanner.scan().await {
            Ok(rows) if rows.is_empty() => render::SMARTMONEY_NONE.to_string(),
            Ok(rows) => render::smart_money(&rows),
            Err(err) => {
                error!(error = %err, "smart money scan failed");
                render::SMARTMONEY_FAILED.to_string()
            }
        };
        self.reply(caller, response).await
    }

    async fn new_tokens(
        &self,
        caller: &UserId,
        chain: Option<String>,
        hours: Option<i64>,
    ) -> Result<()> {
        let chain = chain.unwrap_or_else(|| self.defaults.chain.clone());
        let hours = hours.unwrap_or(self.defaults.hours);

        self.reply(caller, render::newtokens_ack(&chain, hours)).await?;

        let network = match Network::resolve(&chain) {
            Ok(network) => network,
            Err(_) => return self.reply(caller, render::NEWTOKENS_FAILED).await,
        };

        match self.discovery.new_tokens(network, Duration::hours(hours)).await {
            Ok(tokens) if tokens.is_empty() => self.reply(caller, render::NEWTOKENS_NONE).await,
            Ok(tokens) => {
                let listing = render::new_tokens(&chain, hours, &tokens, TOKEN_DISPLAY_LIMIT);
                self.selections.replace(caller, tokens);
                self.messenger
                    .send(caller, &Outgoing::markdown(listing))
                    .await
            }
            Err(err) => {
                error!(error = %err, network = %network, "token discovery failed");
                self.reply(caller, render::NEWTOKENS_FAILED).await
            }
        }
    }

    async fn top_traders(&self, caller: &UserId, index: Option<i64>) -> Result<()> {
        let Some(tokens) = self
            .selections
            .current(caller)
            .filter(|tokens| !tokens.is_empty())
        else {
            return self.reply(caller, render::TOPTRADERS_NO_SELECTION).await;
        };

        let position = match index {
            Some(i) if i >= 1 && (i as usize) <= tokens.len() => i as usize,
            _ => return self.reply(caller, render::TOPTRADERS_BAD_INDEX).await,
        };
        let token = &tokens[position - 1];

        self.reply(caller, render::toptraders_ack(token)).await?;

        match self.buyers.top_buyers(token.lookup_key()).await {
            Ok(buyers) if buyers.is_empty() => self.reply(caller, render::TOPTRADERS_EMPTY).await,
            Ok(buyers) => self.reply(caller, render::top_traders(token, &buyers)).await,
            Err(err) => {
                error!(error = %err, token = %token.symbol, "buyer lookup failed");
                self.reply(caller, render::TOPTRADERS_FAILED).await
            }
        }
    }
}
