//! Inbound change-event model.
//!
//! Mirrors the host editor's text-document change payload. The host serializes
//! events as JSON with camelCase keys (`fileName`, `contentChanges`), one event
//! per line on stdin.

use serde::{Deserialize, Serialize};

/// Identity of the changed document: access scheme, full URI string, file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentId {
    pub scheme: String,
    pub uri: String,
    pub file_name: String,
}

/// One inserted chunk of text within a change event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentChange {
    pub text: String,
}

/// A document-change event delivered by the host editor. `content_changes` is
/// ordered; a streamed chat response arrives as its last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub document: DocumentId,
    pub content_changes: Vec<ContentChange>,
}
