//! Error types for the notifier.
//!
//! [`NotifyError`] covers the two failure families the notifier knows:
//! configuration (missing credentials) and transport (HTTP status or network).

use thiserror::Error;

/// Top-level error for notifier operations.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Bot token or chat id is empty; no network call was attempted.
    #[error("Configure the telegram credentials")]
    MissingCredentials,

    /// Telegram answered with a non-2xx status code.
    #[error("Telegram error: {0}")]
    Telegram(u16),

    /// The request never produced a status (DNS, TLS, connect, ...).
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for notifier operations; uses [`NotifyError`].
pub type Result<T> = std::result::Result<T, NotifyError>;
