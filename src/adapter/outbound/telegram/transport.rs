use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::error::{Error, Result};
use crate::port::{ChatTransport, OutboundMessage, ReplyMenu};

/// Sends replies through the Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn keyboard(menu: &ReplyMenu) -> KeyboardMarkup {
    KeyboardMarkup::new(menu.rows.iter().map(|row| {
        row.iter()
            .map(|caption| KeyboardButton::new(caption.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send(&self, message: OutboundMessage) -> Result<()> {
        let request = self.bot.send_message(ChatId(message.chat_id), message.text);
        let request = match message.menu {
            Some(menu) => request.reply_markup(keyboard(&menu)),
            None => request,
        };

        request.await.map_err(|e| Error::Telegram(e.to_string()))?;
        Ok(())
    }
}
