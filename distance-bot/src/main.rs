//! distance-bot CLI: run the Telegram bot. Config from env (and `.env`) plus optional CLI args.

use anyhow::Result;
use clap::Parser;
use distance_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
    }
}
