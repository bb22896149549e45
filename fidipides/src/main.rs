//! Binary for the fidipides notifier.
//! Subcommands: `ping` (one test message) and `run` (stdin event loop).

use anyhow::Result;
use clap::Parser;
use fidipides::{run_notifier, Cli, Commands, ConfigSource, EnvConfig, Notifier, TelegramSender};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { token } => {
            let source: Arc<dyn ConfigSource> = Arc::new(EnvConfig::new().with_token(token));
            let sender = Arc::new(TelegramSender::new(source.clone()));
            let notifier = Notifier::new(sender, source);
            match notifier.send_test_ping().await {
                Ok(()) => println!("Ping sent to Telegram."),
                Err(e) => {
                    eprintln!("Telegram ping failed: {}", e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Run { token, project } => {
            let config = EnvConfig::new().with_token(token).with_project(project);
            run_notifier(config).await
        }
    }
}
