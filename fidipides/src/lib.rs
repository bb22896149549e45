//! # fidipides
//!
//! Telegram notifier for editor document-change events. Reads change events
//! as JSON lines on stdin, sends one notice when an AI chat response finishes
//! streaming and one combined notice when a burst of file edits settles, rate
//! limited by a shared cooldown. Core types (events, config, Messenger) come
//! from fidipides-core; the Bot API transport from fidipides-telegram.

pub mod cli;
pub mod heuristics;
pub mod message;
pub mod notifier;
pub mod router;
pub mod runner;

// Re-export the CLI surface.
pub use cli::{Cli, Commands};

// Re-export core types (from fidipides-core).
pub use fidipides_core::{
    init_tracing, ChangeEvent, ConfigSource, ContentChange, DocumentId, Messenger, NotifyConfig,
    NotifyError,
};

// Re-export the Telegram transport (from fidipides-telegram).
pub use fidipides_telegram::{mask_token, EnvConfig, TelegramSender};

pub use heuristics::{is_chat_document, is_response_complete, meets_size_threshold};
pub use message::{base_name, batch_message, completion_message, DEFAULT_PROJECT_NAME, TEST_PING};
pub use notifier::{can_notify, Notifier};
pub use router::ChangeRouter;
pub use runner::{run_events, run_notifier};
