//! Bot API send path.
//!
//! One POST per notification: form-encoded `chat_id` + `text` to
//! `{base}/bot{token}/sendMessage`. Any 2xx status is success; anything else
//! is an error for the caller to log or surface. No retries, no backoff.

use async_trait::async_trait;
use fidipides_core::{ConfigSource, Messenger, NotifyError, Result};
use std::sync::Arc;
use tracing::debug;

/// Default Bot API endpoint. TELEGRAM_API_URL overrides it; tests point it at
/// a local mock server.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Masks a bot token for safe logging. Telegram tokens are `<bot id>:<secret>`;
/// the numeric id stays visible, the secret never does. Tokens without a colon
/// are fully masked.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) => format!("{}:***", id),
        None => "***".to_string(),
    }
}

/// Sends notification texts through the Telegram Bot API.
///
/// Credentials and endpoint come from the [`ConfigSource`] on every send,
/// never cached, so a token configured after startup is picked up by the next
/// notification.
pub struct TelegramSender {
    http: reqwest::Client,
    source: Arc<dyn ConfigSource>,
}

impl TelegramSender {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            source,
        }
    }
}

#[async_trait]
impl Messenger for TelegramSender {
    async fn send_message(&self, text: &str) -> Result<()> {
        let cfg = self.source.config();
        if cfg.bot_token.is_empty() || cfg.chat_id.is_empty() {
            return Err(NotifyError::MissingCredentials);
        }

        let base = cfg.api_url.as_deref().unwrap_or(TELEGRAM_API_URL);
        let url = format!(
            "{}/bot{}/sendMessage",
            base.trim_end_matches('/'),
            cfg.bot_token
        );

        debug!(
            bot = %mask_token(&cfg.bot_token),
            chat_id = %cfg.chat_id,
            len = text.len(),
            "Sending Telegram message"
        );

        let response = self
            .http
            .post(&url)
            .form(&[("chat_id", cfg.chat_id.as_str()), ("text", text)])
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Telegram(status.as_u16()))
        }
    }
}
