use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use distance_client::DEFAULT_DISTANCE_URL;
use std::env;

/// Bot config loaded from env: Telegram access plus the route page URL.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// Route page queried for distances. Env: `DISTANCE_SERVICE_URL`.
    pub distance_service_url: String,
}

impl BotConfig {
    /// Loads config from env. `token`, when given, overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let distance_service_url = env::var("DISTANCE_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_DISTANCE_URL.to_string());
        Ok(Self {
            telegram,
            distance_service_url,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        reqwest::Url::parse(&self.distance_service_url).with_context(|| {
            format!("Invalid DISTANCE_SERVICE_URL: {}", self.distance_service_url)
        })?;
        Ok(())
    }
}
