//! Recording `Messenger` double shared by the integration tests.
//!
//! Captures outgoing texts in order instead of hitting the network, so tests
//! can assert on message count and content.

use std::sync::Mutex;

use async_trait::async_trait;
use fidipides_core::{Messenger, Result};

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<String>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every text sent so far, in send order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
