//! Shared pure functions for document classification, streamed-response
//! completion detection, and the minimum-size check on queued edits.
//!
//! Used by the change router to pick the notification path for each event.
//! All checks are case-sensitive substring heuristics; false positives and
//! negatives are accepted.

use fidipides_core::DocumentId;

/// Returns true if the document is a conversational AI surface rather than an
/// ordinary source file: the reserved chat scheme, a chat-marker file name,
/// or an assistant-owned URI.
#[inline]
pub fn is_chat_document(document: &DocumentId) -> bool {
    document.scheme == "vscode-chat"
        || document.file_name.contains("copilot-chat")
        || document.uri.contains("copilot")
}

/// Returns true if `text` looks like the end of a streamed response: a fenced
/// code block marker, a trailing blank line, or a sentence-final period
/// optionally followed by whitespace.
#[inline]
pub fn is_response_complete(text: &str) -> bool {
    text.contains("```") || text.ends_with("\n\n") || text.trim_end().ends_with('.')
}

/// Returns true if an inserted text is big enough to queue: at least
/// `min_chars` characters OR at least `min_lines` lines. Zero for both
/// disables the check.
#[inline]
pub fn meets_size_threshold(text: &str, min_chars: usize, min_lines: usize) -> bool {
    text.chars().count() >= min_chars || text.lines().count() >= min_lines
}
