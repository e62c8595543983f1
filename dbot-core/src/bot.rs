//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide. Tests substitute
//! a recording implementation.

use crate::error::Result;
use crate::types::{Chat, Message, OutgoingMessage};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message, with its keyboard directive, to the given chat.
    async fn send(&self, chat: &Chat, message: &OutgoingMessage) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, reply: &OutgoingMessage) -> Result<()> {
        self.send(&message.chat, reply).await
    }
}
