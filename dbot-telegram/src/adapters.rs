//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{Chat, Message, MessageDirection, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
/// Non-text messages become a core message with empty content and `message_type` "other".
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let text = self.0.text();
        Message {
            id: self.0.id.to_string(),
            user: self.sender(),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat),
            },
            content: text.unwrap_or("").to_string(),
            message_type: if text.is_some() { "text" } else { "other" }.to_string(),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Sender as a core user. Messages posted on behalf of a chat (anonymous admins, channels) use the
    /// sender chat's id; with neither `from` nor `sender_chat` the id is 0.
    fn sender(&self) -> User {
        if let Some(user) = self.0.from.as_ref() {
            return TelegramUserWrapper(user).to_core();
        }
        match self.0.sender_chat.as_ref() {
            Some(chat) => User {
                id: chat.id.0,
                username: chat.username().map(str::to_string),
                first_name: chat.title().map(str::to_string),
                last_name: None,
            },
            None => User {
                id: 0,
                username: None,
                first_name: None,
                last_name: None,
            },
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() || chat.is_supergroup() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Иван".to_string(),
            last_name: Some("Петров".to_string()),
            username: Some("ivan_dispatcher".to_string()),
            language_code: Some("ru".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let wrapper = TelegramUserWrapper(&user);
        let core_user = wrapper.to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("ivan_dispatcher".to_string()));
        assert_eq!(core_user.first_name, Some("Иван".to_string()));
        assert_eq!(core_user.last_name, Some("Петров".to_string()));
    }

    fn parse_message(json: &str) -> teloxide::types::Message {
        serde_json::from_str(json).unwrap()
    }

    /// **Test: Message with `from` uses the sender's id; text content and type are kept.**
    #[test]
    fn test_message_wrapper_uses_from() {
        let msg = parse_message(
            r#"{
                "message_id": 7,
                "date": 1706529600,
                "chat": {"id": 456, "type": "private", "first_name": "Иван"},
                "from": {"id": 123, "is_bot": false, "first_name": "Иван"},
                "text": "Забойщик\nПоздеевка"
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();
        assert_eq!(core.user.id, 123);
        assert_eq!(core.chat.id, 456);
        assert_eq!(core.chat.chat_type, "private");
        assert_eq!(core.content, "Забойщик\nПоздеевка");
        assert_eq!(core.message_type, "text");
    }

    /// **Test: Message sent on behalf of a chat takes the sender chat's id, not a shared 0.**
    #[test]
    fn test_message_wrapper_falls_back_to_sender_chat() {
        let msg = parse_message(
            r#"{
                "message_id": 8,
                "date": 1706529600,
                "chat": {"id": -100200, "type": "supergroup", "title": "Диспетчерская"},
                "sender_chat": {"id": -100300, "type": "channel", "title": "Вагоны"},
                "text": "/start"
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();
        assert_eq!(core.user.id, -100300);
        assert_eq!(core.user.first_name.as_deref(), Some("Вагоны"));
        assert_eq!(core.chat.chat_type, "group");
    }
}
