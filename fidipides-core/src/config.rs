//! Notifier configuration and the per-call [`ConfigSource`] seam.
//!
//! Configuration is not owned by the engine: every operation (send, cooldown
//! check, timer scheduling) asks the source again, so a changed value such as
//! a longer batch window applies on the next call without a restart.

/// Default cooldown between two notifications, seconds.
pub const DEFAULT_COOLDOWN_SECS: u64 = 45;

/// Default debounce window for file-edit batching, seconds.
pub const DEFAULT_BATCH_SECS: u64 = 30;

/// Notifier configuration: credentials, endpoint override, timing, and the
/// optional minimum-size thresholds for queuing file edits.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Telegram bot token. Empty means unconfigured; sends fail without a network call.
    pub bot_token: String,
    /// Target chat id. Empty means unconfigured.
    pub chat_id: String,
    /// Base URL override for the Bot API; None means api.telegram.org.
    pub api_url: Option<String>,
    /// Minimum seconds between two notifications.
    pub cooldown_secs: u64,
    /// Quiet period after the last qualifying file edit before the batch is sent.
    pub batch_secs: u64,
    /// Queue a file edit only when it inserted at least this many characters
    /// or at least `min_lines` lines (OR'd); 0 for both disables the check.
    pub min_chars: usize,
    /// See `min_chars`.
    pub min_lines: usize,
    /// Workspace name shown in batch notices; None renders as "Undefined".
    pub project_name: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            api_url: None,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            batch_secs: DEFAULT_BATCH_SECS,
            min_chars: 0,
            min_lines: 0,
            project_name: None,
        }
    }
}

impl NotifyConfig {
    /// Config with the given credentials and default timing.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            ..Self::default()
        }
    }
}

/// Source of the current configuration, consulted on every operation rather
/// than cached. Production reads the environment; tests hand in fixed or
/// mutable configs.
pub trait ConfigSource: Send + Sync {
    fn config(&self) -> NotifyConfig;
}

/// A fixed configuration is its own source (one-shot commands, tests).
impl ConfigSource for NotifyConfig {
    fn config(&self) -> NotifyConfig {
        self.clone()
    }
}
