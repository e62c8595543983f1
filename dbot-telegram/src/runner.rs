//! REPL 运行：将 teloxide 消息转为 core::Message 后交给 HandlerChain 处理。
//! 与外部交互：调用 teloxide REPL、HandlerChain、get_me 写回 bot_username。

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// 使用给定的 teloxide Bot、HandlerChain 和 bot_username 缓存启动 REPL。
/// 启动前会调用 get_me() 并写入 bot_username（用于解析 `/start@botname` 形式的命令）。
/// 每条消息在当前任务内交给 chain.handle：teloxide 对同一 chat 的更新顺序分发，因此同一会话同时只有一个处理流程。
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands with @botname suffix will not match"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Handler chain failed"
                );
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
