//! Core types: user, chat, message, outgoing reply, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single incoming message with user, chat and text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages (stickers, photos, ...).
    pub content: String,
    pub message_type: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Keyboard directive attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplyMarkup {
    /// Leave whatever keyboard the client shows.
    #[default]
    None,
    /// One row of quick-reply buttons, hidden by the client after one press.
    Keyboard(Vec<String>),
    /// Remove the quick-reply keyboard.
    RemoveKeyboard,
}

/// Text reply plus its keyboard directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub markup: ReplyMarkup,
}

impl OutgoingMessage {
    /// Plain text, keyboard untouched.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: ReplyMarkup::None,
        }
    }

    /// Text with a one-row quick-reply keyboard.
    pub fn with_keyboard<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            markup: ReplyMarkup::Keyboard(options.into_iter().map(Into::into).collect()),
        }
    }

    /// Text that also clears the quick-reply keyboard.
    pub fn removing_keyboard(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: ReplyMarkup::RemoveKeyboard,
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent back.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_message_constructors() {
        let plain = OutgoingMessage::text("hi");
        assert_eq!(plain.markup, ReplyMarkup::None);

        let keyboard = OutgoingMessage::with_keyboard("pick", ["a", "b"]);
        assert_eq!(
            keyboard.markup,
            ReplyMarkup::Keyboard(vec!["a".to_string(), "b".to_string()])
        );

        let removed = OutgoingMessage::removing_keyboard("bye");
        assert_eq!(removed.text, "bye");
        assert_eq!(removed.markup, ReplyMarkup::RemoveKeyboard);
    }
}
