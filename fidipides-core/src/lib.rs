//! # fidipides-core
//!
//! Core types and traits for the change notifier: the inbound change-event model,
//! [`Messenger`] and [`ConfigSource`] seams, the error taxonomy, and tracing
//! initialization. Transport-agnostic; used by fidipides-telegram and the
//! fidipides app crate.

pub mod config;
pub mod error;
pub mod logger;
pub mod messenger;
pub mod types;

pub use config::{ConfigSource, NotifyConfig, DEFAULT_BATCH_SECS, DEFAULT_COOLDOWN_SECS};
pub use error::{NotifyError, Result};
pub use logger::init_tracing;
pub use messenger::Messenger;
pub use types::{ChangeEvent, ContentChange, DocumentId};
