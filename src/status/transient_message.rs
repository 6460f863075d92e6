//! Status line with timer-based clearing.
//!
//! This module provides the user-facing error line. Each error schedules its
//! own clear after a delay; timers are never cancelled.

use serde::Serialize;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// What the status line currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    /// Message shown to the user, if any
    pub message: Option<String>,

    /// Whether the input should be highlighted as invalid
    pub input_invalid: bool,
}

/// A thread-safe status line whose errors clear themselves.
///
/// Cloning is cheap and clones share the same line.
///
/// Overlapping errors each get an independent timer, so an earlier timer
/// may clear a later message. Clearing is idempotent.
#[derive(Debug, Clone, Default)]
pub struct TransientMessage {
    state: Arc<RwLock<StatusSnapshot>>,
}

impl TransientMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an error and schedule it to clear after `ttl`.
    ///
    /// Outside a tokio runtime the message is shown but no timer runs.
    pub fn show_error(&self, message: impl Into<String>, ttl: Duration) {
        let message = message.into();

        if let Ok(mut state) = self.state.write() {
            state.message = Some(message);
            state.input_invalid = true;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let line = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    line.clear();
                    tracing::trace!("Status message cleared by timer");
                });
            }
            Err(_) => {
                tracing::warn!("No runtime available; status message will not auto-clear");
            }
        }
    }

    /// Clear the message and the invalid flag.
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = StatusSnapshot::default();
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    pub fn message(&self) -> Option<String> {
        self.snapshot().message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_error_without_runtime() {
        let line = TransientMessage::new();
        line.show_error("Invalid name", Duration::from_secs(3));

        let snapshot = line.snapshot();
        assert_eq!(snapshot.message.as_deref(), Some("Invalid name"));
        assert!(snapshot.input_invalid);

        line.clear();
        assert_eq!(line.snapshot(), StatusSnapshot::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_clears_after_ttl() {
        let line = TransientMessage::new();
        line.show_error("Invalid city", Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert_eq!(line.message().as_deref(), Some("Invalid city"));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(line.message(), None);
        assert!(!line.snapshot().input_invalid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_timers_each_clear() {
        let line = TransientMessage::new();
        line.show_error("first", Duration::from_secs(3));

        tokio::time::sleep(Duration::from_secs(2)).await;
        line.show_error("second", Duration::from_secs(3));
        assert_eq!(line.message().as_deref(), Some("second"));

        // The first timer fires at 3s and clears the second message too.
        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert_eq!(line.message(), None);

        // The second timer fires at 5s; clearing an empty line is harmless.
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(line.message(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let line = TransientMessage::new();
        let other = line.clone();
        line.show_error("shared", Duration::from_secs(1));
        assert_eq!(other.message().as_deref(), Some("shared"));
    }
}
