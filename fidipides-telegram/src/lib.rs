//! # fidipides-telegram
//!
//! Telegram transport for the notifier: [`TelegramSender`] implements
//! [`fidipides_core::Messenger`] over the Bot API `sendMessage` method, and
//! [`EnvConfig`] supplies a fresh [`fidipides_core::NotifyConfig`] from the
//! environment on every call.

pub mod config;
pub mod sender;

pub use config::EnvConfig;
pub use sender::{mask_token, TelegramSender, TELEGRAM_API_URL};
