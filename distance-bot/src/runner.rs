//! Startup wiring: logging, Telegram bot, handler chain, REPL.

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use distance_client::{DistanceResolver, HttpDistanceResolver};
use distance_handlers::{Command, DistanceDialogueHandler, InMemorySessionStore, SessionStore};
use handler_chain::HandlerChain;
use handlers::LoggingHandler;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;

/// Chain used by the bot: logging first, then the distance dialogue.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    resolver: Arc<dyn DistanceResolver>,
    sessions: Arc<dyn SessionStore>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let dialogue = DistanceDialogueHandler::new(bot, resolver, sessions)
        .with_bot_username(bot_username);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(dialogue))
}

/// Main entry: validate config, init logging, register commands, build the chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.telegram.log_file)
        .with_context(|| format!("Failed to init logging to {}", config.telegram.log_file))?;

    info!(
        log_file = %config.telegram.log_file,
        distance_service_url = %config.distance_service_url,
        telegram_api_url = ?config.telegram.telegram_api_url,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;

    if let Err(e) = teloxide_bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let bot_username = Arc::new(RwLock::new(None));
    let handler_chain = build_handler_chain(
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        Arc::new(HttpDistanceResolver::new(config.distance_service_url.clone())),
        Arc::new(InMemorySessionStore::new()),
        bot_username.clone(),
    );

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain, bot_username).await
}
