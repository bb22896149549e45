//! Stateful notification engine: the cooldown gate and the batch coalescer.
//!
//! One [`Notifier`] owns the mutable session state (last-notify instant,
//! pending file set, batch timer) behind a single async mutex. Configuration
//! is read through the [`ConfigSource`] on every call, so changed values
//! apply to the next operation. The cooldown stamp is taken before a send is
//! awaited, so a second trigger racing an in-flight send is always blocked.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Local;
use fidipides_core::{ConfigSource, Messenger, Result};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, error};

use crate::message;

/// Cooldown gate: true when no notification was sent yet, or the last one is
/// at least `cooldown` ago.
pub fn can_notify(last_notify_at: Option<Instant>, now: Instant, cooldown: Duration) -> bool {
    match last_notify_at {
        Some(at) => now.duration_since(at) >= cooldown,
        None => true,
    }
}

#[derive(Default)]
struct NotifierState {
    last_notify_at: Option<Instant>,
    pending_files: BTreeSet<String>,
    batch_timer: Option<JoinHandle<()>>,
}

/// Decides when to notify and sends through the injected [`Messenger`].
///
/// Cheap to clone; clones share the same state. The batch timer is a spawned
/// task holding a clone, aborted and replaced whenever a new file arrives
/// within the window (pure debounce, one flush per quiet period).
#[derive(Clone)]
pub struct Notifier {
    messenger: Arc<dyn Messenger>,
    source: Arc<dyn ConfigSource>,
    state: Arc<Mutex<NotifierState>>,
}

impl Notifier {
    pub fn new(messenger: Arc<dyn Messenger>, source: Arc<dyn ConfigSource>) -> Self {
        Self {
            messenger,
            source,
            state: Arc::new(Mutex::new(NotifierState::default())),
        }
    }

    /// Sends the fixed test ping. Bypasses the cooldown and leaves the
    /// cooldown stamp untouched; errors surface to the caller.
    pub async fn send_test_ping(&self) -> Result<()> {
        self.messenger.send_message(message::TEST_PING).await
    }

    /// Sends the chat-completion notice if the cooldown permits. A suppressed
    /// notice is not an error; send failures propagate to the caller.
    pub async fn notify_chat_complete(&self) -> Result<()> {
        let cooldown = Duration::from_secs(self.source.config().cooldown_secs);
        {
            let mut state = self.state.lock().await;
            if !can_notify(state.last_notify_at, Instant::now(), cooldown) {
                debug!("Cooldown active, suppressing completion notice");
                return Ok(());
            }
            state.last_notify_at = Some(Instant::now());
        }
        self.messenger
            .send_message(&message::completion_message(Local::now()))
            .await
    }

    /// Queues a changed file and (re)starts the debounce timer. Each call
    /// cancels the previous timer, so the batch flushes only after a full
    /// quiet window. The window length is read fresh on every call.
    pub async fn add_changed_file(&self, file_name: &str) {
        let window = Duration::from_secs(self.source.config().batch_secs);
        let mut state = self.state.lock().await;
        state.pending_files.insert(file_name.to_string());
        if let Some(timer) = state.batch_timer.take() {
            timer.abort();
        }
        let notifier = self.clone();
        state.batch_timer = Some(tokio::spawn(async move {
            sleep(window).await;
            notifier.flush_batch().await;
        }));
        debug!(
            file = file_name,
            pending = state.pending_files.len(),
            window_secs = window.as_secs(),
            "Queued file change"
        );
    }

    /// Flushes the pending batch: one combined notice when the cooldown
    /// permits, nothing otherwise. Pending files and the timer handle are
    /// cleared either way; a denied or failed batch is dropped, not retried.
    ///
    /// The timer handle is cleared under the lock before the send is awaited,
    /// so a file arriving during the send schedules a fresh timer instead of
    /// aborting the in-flight send.
    async fn flush_batch(&self) {
        let text = {
            let mut state = self.state.lock().await;
            state.batch_timer = None;
            if state.pending_files.is_empty() {
                return;
            }
            let cfg = self.source.config();
            let cooldown = Duration::from_secs(cfg.cooldown_secs);
            if !can_notify(state.last_notify_at, Instant::now(), cooldown) {
                debug!(
                    dropped = state.pending_files.len(),
                    "Cooldown active, dropping batch"
                );
                state.pending_files.clear();
                return;
            }
            state.last_notify_at = Some(Instant::now());
            let files = std::mem::take(&mut state.pending_files);
            message::batch_message(&files, cfg.project_name.as_deref())
        };
        if let Err(e) = self.messenger.send_message(&text).await {
            error!(error = %e, "Failed to send batch notification");
        }
    }

    /// Aborts a pending batch timer and drops queued files without a final
    /// flush. Called when the event stream ends.
    pub async fn shutdown(&self) {
        let mut state = self.state.lock().await;
        if let Some(timer) = state.batch_timer.take() {
            timer.abort();
        }
        if !state.pending_files.is_empty() {
            debug!(
                dropped = state.pending_files.len(),
                "Dropping pending batch on shutdown"
            );
            state.pending_files.clear();
        }
    }
}
