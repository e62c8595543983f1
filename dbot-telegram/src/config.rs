//! 框架最小配置：仅 token、API URL、日志路径。
//! 与外部交互：从环境变量 BOT_TOKEN、TELEGRAM_API_URL、LOG_FILE 加载。

use anyhow::{Context, Result};
use std::env;

/// 默认日志文件路径。
pub const DEFAULT_LOG_FILE: &str = "logs/distance-bot.log";

/// Telegram Bot 框架最小配置（仅 Telegram 接入与日志）。
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// 从环境变量加载：BOT_TOKEN 必填（`token` 不为 None 时优先使用），TELEGRAM_API_URL、LOG_FILE 可选。
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// 使用给定 token 构造，其余为默认值。
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// 校验：token 非空，API URL（若设置）可解析。
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(url) = &self.telegram_api_url {
            reqwest::Url::parse(url)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url))?;
        }
        Ok(())
    }

    /// 构造 teloxide Bot；设置了 TELEGRAM_API_URL 时请求发往该地址（测试时可指向 mock 服务器）。
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
