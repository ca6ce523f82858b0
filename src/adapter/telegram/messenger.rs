//! Outbound message delivery through the Telegram Bot API.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

use crate::domain::UserId;
use crate::error::{Error, Result};
use crate::port::outbound::messenger::{Messenger, Outgoing};

/// [`Messenger`] implementation over a teloxide [`Bot`].
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, to: &UserId, message: &Outgoing) -> Result<()> {
        let chat_id: i64 = to
            .as_str()
            .parse()
            .map_err(|_| Error::Parse(format!("invalid chat id `{to}`")))?;

        let request = self.bot.send_message(ChatId(chat_id), message.text.as_str());
        if message.markdown {
            request.parse_mode(ParseMode::MarkdownV2).await?;
        } else {
            request.await?;
        }
        Ok(())
    }
}
