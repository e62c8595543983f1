//! # distance-bot
//!
//! Telegram bot that asks for origin stations and a destination, looks the distance up on the route
//! page, and replies with it. Wires dbot-telegram, the handler chain, the dialogue handler and the
//! distance client; config comes from env (optionally `.env`) and CLI args.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_handler_chain, run_bot};
