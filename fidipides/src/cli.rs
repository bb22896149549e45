//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fidipides")]
#[command(about = "Editor-change Telegram notifier", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a test ping to the configured chat (credentials from env; token can override BOT_TOKEN).
    Ping {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Read change events from stdin and notify on chat completions and settled file edits.
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Project name shown in batch notices (overrides PROJECT_NAME).
        #[arg(short, long)]
        project: Option<String>,
    },
}
