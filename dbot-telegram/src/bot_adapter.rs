//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, OutgoingMessage, ReplyMarkup, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Maps a core keyboard directive to the Telegram reply markup. `None` means "send without markup".
pub fn to_teloxide_markup(markup: &ReplyMarkup) -> Option<teloxide::types::ReplyMarkup> {
    match markup {
        ReplyMarkup::None => None,
        ReplyMarkup::Keyboard(options) => {
            let row: Vec<KeyboardButton> = options.iter().map(KeyboardButton::new).collect();
            Some(teloxide::types::ReplyMarkup::Keyboard(
                KeyboardMarkup::new(vec![row])
                    .resize_keyboard()
                    .one_time_keyboard(),
            ))
        }
        ReplyMarkup::RemoveKeyboard => Some(teloxide::types::ReplyMarkup::KeyboardRemove(
            KeyboardRemove::new(),
        )),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, chat: &Chat, message: &OutgoingMessage) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), message.text.clone());
        let request = match to_teloxide_markup(&message.markup) {
            Some(markup) => request.reply_markup(markup),
            None => request,
        };
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
