//! Notification message templates: test ping, chat-completion notice, and
//! the combined file-batch notice.

use chrono::{DateTime, Local};
use std::collections::BTreeSet;

/// Fixed text for the `ping` command.
pub const TEST_PING: &str = "Test ping from fidipides ✅";

/// Project name shown when none is configured, in batch notices and in the
/// startup log line.
pub const DEFAULT_PROJECT_NAME: &str = "Undefined";

/// Notice sent when a chat response finishes streaming.
pub fn completion_message(at: DateTime<Local>) -> String {
    format!(
        "🤖 Copilot Chat response completed!\n• Time: {}\n• Ready for review",
        at.format("%H:%M:%S")
    )
}

/// Combined notice for a settled batch of file edits. File names are reduced
/// to their base names; a missing project name renders as
/// [`DEFAULT_PROJECT_NAME`].
pub fn batch_message(files: &BTreeSet<String>, project_name: Option<&str>) -> String {
    let names: Vec<&str> = files.iter().map(|f| base_name(f)).collect();
    format!(
        "🚨 {} file(s) changed\n• Project: {}\n• Files: {}",
        files.len(),
        project_name.unwrap_or(DEFAULT_PROJECT_NAME),
        names.join(", ")
    )
}

/// Last `/`- or `\`-separated segment of `path`; the whole string when there
/// is no separator or the last segment is empty.
pub fn base_name(path: &str) -> &str {
    match path.rsplit(['/', '\\']).next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_base_name_strips_unix_and_windows_separators() {
        assert_eq!(base_name("/home/dev/project/src/main.rs"), "main.rs");
        assert_eq!(base_name("C:\\project\\src\\main.rs"), "main.rs");
        assert_eq!(base_name("notes.md"), "notes.md");
    }

    #[test]
    fn test_base_name_keeps_path_with_empty_last_segment() {
        assert_eq!(base_name("src/"), "src/");
    }

    #[test]
    fn test_completion_message_carries_local_time() {
        let at = Local.with_ymd_and_hms(2024, 5, 4, 9, 30, 15).unwrap();
        assert_eq!(
            completion_message(at),
            "🤖 Copilot Chat response completed!\n• Time: 09:30:15\n• Ready for review"
        );
    }

    #[test]
    fn test_batch_message_counts_and_joins_base_names() {
        let files: BTreeSet<String> = ["/w/src/lib.rs", "/w/src/main.rs"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            batch_message(&files, Some("demo")),
            "🚨 2 file(s) changed\n• Project: demo\n• Files: lib.rs, main.rs"
        );
    }

    #[test]
    fn test_batch_message_defaults_project_name() {
        let files: BTreeSet<String> = ["a.ts".to_string()].into_iter().collect();
        assert_eq!(
            batch_message(&files, None),
            "🚨 1 file(s) changed\n• Project: Undefined\n• Files: a.ts"
        );
    }
}
