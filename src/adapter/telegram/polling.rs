//! Long-poll transport.
//!
//! Opens a persistent getUpdates loop and registers the command menu with
//! Telegram. Each update is handled to completion before the next.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use crate::port::outbound::messenger::Messenger;

use super::command::bot_commands;
use super::handle_message;
use super::router::Router;

/// Run the long-poll loop until the process is stopped.
pub async fn run(bot: Bot, router: Arc<Router>, messenger: Arc<dyn Messenger>) {
    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram long-poll listener started");

    teloxide::repl(bot, move |_bot: Bot, msg: Message| {
        let router = router.clone();
        let messenger = messenger.clone();
        async move {
            if let Err(e) = handle_message(&router, messenger.as_ref(), &msg).await {
                error!(error = %e, "Failed to acknowledge Telegram update");
            }
            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
