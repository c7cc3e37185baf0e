//! Notifier Adapters
//!
//! `TracingNotifier` writes notifications to the log; `RecordingNotifier`
//! keeps them for inspection.

use crate::domain::Notification;
use crate::ports::outbound::Notifier;
use parking_lot::Mutex;
use tracing::info;

/// Logs each notification at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        info!(
            title = %notification.title,
            description = notification.description.as_deref().unwrap_or(""),
            "[lg-02] notification"
        );
    }
}

/// Collects notifications in arrival order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything received so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.received.lock())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.received.lock().push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_drains() {
        let recorder = RecordingNotifier::new();
        recorder.notify(&Notification::new("a"));
        recorder.notify(&Notification::new("b").with_description("c"));
        let got = recorder.take();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].description.as_deref(), Some("c"));
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_tracing_notifier_does_not_panic_without_subscriber() {
        TracingNotifier.notify(&Notification::new("Water critically low"));
    }
}
