//! Logging initialization: human-readable lines (local timestamp, level,
//! target, message, fields) teed to stdout and an append-mode log file.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::Writer, fmt::time::FormatTime, layer::SubscriberExt, util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local wall-clock time in `YYYY-MM-DD HH:MM:SS` for log lines.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Initializes the global tracing subscriber.
///
/// Output goes to stdout and to `log_file` (append mode; the parent directory
/// is created if missing). No ANSI codes so the file stays plain text. Level
/// comes from `RUST_LOG`; default `info`.
pub fn init_tracing(log_file: &str) -> anyhow::Result<()> {
    if let Some(dir) = Path::new(log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let file = Arc::new(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let writer = io::stdout.and(file);

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(LocalTime)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_creates_log_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("notifier.log");
        let log_file = log_path.to_str().unwrap();

        init_tracing(log_file).unwrap();
        tracing::info!("logger smoke line");

        assert!(log_path.exists());
        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("logger smoke line"));
    }
}
