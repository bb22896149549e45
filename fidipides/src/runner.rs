//! Run loop: read change events as JSON lines and drive the router.
//!
//! The host editor pipes one JSON object per line on stdin. EOF means the
//! host is gone: the notifier shuts down and a pending batch is dropped.

use std::sync::Arc;

use anyhow::Result;
use fidipides_core::{init_tracing, ChangeEvent, ConfigSource};
use fidipides_telegram::{mask_token, EnvConfig, TelegramSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::message::DEFAULT_PROJECT_NAME;
use crate::notifier::Notifier;
use crate::router::ChangeRouter;

/// Consumes newline-delimited JSON change events until EOF. Malformed lines
/// are logged and skipped; blank lines are ignored. On EOF the notifier is
/// shut down.
pub async fn run_events<R>(reader: R, router: &ChangeRouter, notifier: &Notifier) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<ChangeEvent>(line) {
            Ok(event) => router.handle_event(&event).await,
            Err(e) => warn!(error = %e, "Skipping malformed change event"),
        }
    }
    info!("Event stream closed, shutting down");
    notifier.shutdown().await;
    Ok(())
}

/// Main entry for `run`: init logging, validate config, wire the Telegram
/// sender, then consume change events from stdin.
pub async fn run_notifier(config: EnvConfig) -> Result<()> {
    config.validate()?;
    let log_file = std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/fidipides.log".to_string());
    init_tracing(&log_file)?;

    let source: Arc<dyn ConfigSource> = Arc::new(config);
    let cfg = source.config();
    info!(
        bot = %mask_token(&cfg.bot_token),
        cooldown_secs = cfg.cooldown_secs,
        batch_secs = cfg.batch_secs,
        project = cfg.project_name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME),
        "Starting notifier"
    );
    if cfg.bot_token.is_empty() || cfg.chat_id.is_empty() {
        warn!("BOT_TOKEN or CHAT_ID not set, notifications will fail until both are configured");
    }

    let sender = Arc::new(TelegramSender::new(source.clone()));
    let notifier = Notifier::new(sender, source.clone());
    let router = ChangeRouter::new(notifier.clone(), source);

    info!("Listening for change events on stdin");
    let stdin = BufReader::new(tokio::io::stdin());
    run_events(stdin, &router, &notifier).await
}
