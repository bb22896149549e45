//! Outbound message abstraction.
//!
//! [`Messenger`] is transport-agnostic: fidipides-telegram implements it over
//! the Bot API; tests substitute a recording double.

use crate::error::Result;
use async_trait::async_trait;

/// Delivers one notification text to the configured destination. No retrying
/// or queueing is expected from implementations; a failed send is the caller's
/// to log or surface.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<()>;
}
