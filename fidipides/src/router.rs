//! Per-event orchestration: classify the changed document, then either gate
//! an immediate chat-completion notice or queue the file for batching.

use std::sync::Arc;

use fidipides_core::{ChangeEvent, ConfigSource};
use tracing::{debug, error};

use crate::heuristics::{is_chat_document, is_response_complete, meets_size_threshold};
use crate::notifier::Notifier;

/// Routes document-change events into the chat path or the file path.
pub struct ChangeRouter {
    notifier: Notifier,
    source: Arc<dyn ConfigSource>,
}

impl ChangeRouter {
    pub fn new(notifier: Notifier, source: Arc<dyn ConfigSource>) -> Self {
        Self { notifier, source }
    }

    /// Entry point for one change event. Send failures are logged, never
    /// propagated; an event without content changes is ignored.
    pub async fn handle_event(&self, event: &ChangeEvent) {
        if is_chat_document(&event.document) {
            self.handle_chat_change(event).await;
        } else {
            self.handle_file_change(event).await;
        }
    }

    /// Chat path: the last inserted chunk decides whether the streamed
    /// response looks finished.
    async fn handle_chat_change(&self, event: &ChangeEvent) {
        let added = match event.content_changes.last() {
            Some(change) => change.text.as_str(),
            None => return,
        };
        if !is_response_complete(added) {
            return;
        }
        debug!(document = %event.document.uri, "Chat response looks complete");
        if let Err(e) = self.notifier.notify_chat_complete().await {
            error!(error = %e, "Failed to send completion notice");
        }
    }

    /// File path: only single-change events count (multi-chunk programmatic
    /// edits are skipped), the insert must be non-empty after trimming, and
    /// the optional size thresholds apply last.
    async fn handle_file_change(&self, event: &ChangeEvent) {
        if event.content_changes.len() != 1 {
            return;
        }
        let inserted = &event.content_changes[0].text;
        if inserted.trim().is_empty() {
            return;
        }
        let cfg = self.source.config();
        if !meets_size_threshold(inserted, cfg.min_chars, cfg.min_lines) {
            return;
        }
        self.notifier
            .add_changed_file(&event.document.file_name)
            .await;
    }
}
