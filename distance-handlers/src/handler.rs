//! Handler-chain entry point for the distance dialogue.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use distance_client::DistanceResolver;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::commands::{is_bot_command, parse_command, Command};
use crate::dialogue::{self, Transition};
use crate::session::{SessionKey, SessionStore};
use crate::state::State;

/// Drives one conversation step per message: loads the session, applies the state's transition,
/// stores or discards the session, and sends the reply.
///
/// Messages that belong to no conversation (plain text before `/start`, unknown commands, non-text
/// messages) are ignored so later handlers may take them.
pub struct DistanceDialogueHandler {
    bot: Arc<dyn Bot>,
    resolver: Arc<dyn DistanceResolver>,
    sessions: Arc<dyn SessionStore>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl DistanceDialogueHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        resolver: Arc<dyn DistanceResolver>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            bot,
            resolver,
            sessions,
            bot_username: Arc::new(RwLock::new(None)),
        }
    }

    /// Shares the bot username cache filled by the runner (for `/start@botname`).
    pub fn with_bot_username(mut self, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        self.bot_username = bot_username;
        self
    }

    /// Picks the transition for `message` given the stored state; None when the message is not ours.
    async fn step(&self, message: &Message, current: Option<State>) -> Option<Transition> {
        let text = message.content.as_str();
        let command = {
            let username = self.bot_username.read().await;
            parse_command(text, username.as_deref())
        };

        match (command, current) {
            (Some(Command::Start), _) => Some(dialogue::start()),
            (Some(Command::Cancel), Some(state)) if state.is_active() => Some(dialogue::cancel()),
            (Some(Command::Cancel), _) => None,
            (None, _) if is_bot_command(text) => None,
            (None, Some(State::StationsSelection)) => Some(dialogue::stations_selection(text)),
            (None, Some(State::FinalStationSelection { stations })) => Some(
                dialogue::final_station_selection(stations, text, self.resolver.as_ref()).await,
            ),
            (None, _) => None,
        }
    }
}

#[async_trait]
impl Handler for DistanceDialogueHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.message_type != "text" {
            debug!("Non-text message ignored by dialogue");
            return Ok(HandlerResponse::Ignore);
        }
        if message.user.id == 0 {
            debug!("Message without a sender ignored by dialogue");
            return Ok(HandlerResponse::Ignore);
        }

        let key = SessionKey::from(message);
        let current = self.sessions.get(&key).await?;
        let from = current.as_ref().map(State::name).unwrap_or("start");

        let Some(transition) = self.step(message, current).await else {
            debug!(state = %from, "Message outside of an active dialogue step, ignored");
            return Ok(HandlerResponse::Ignore);
        };

        if transition.next.is_active() {
            self.sessions.set(key, transition.next.clone()).await?;
        } else {
            self.sessions.remove(&key).await?;
        }

        info!(
            from = %from,
            to = %transition.next.name(),
            "Dialogue transition"
        );

        self.bot.reply_to(message, &transition.reply).await?;

        Ok(HandlerResponse::Reply(transition.reply.text))
    }
}
