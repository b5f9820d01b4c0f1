//! Delivery of user-facing notices.
//!
//! Stores report outcomes ("Added to cart", "Login failed", ...) through an
//! injected [`Notifier`] so the presentation layer decides how to show them.

use std::sync::Mutex;

use crate::models::Notice;

/// Receives notices emitted by the stores.
pub trait Notifier: Send + Sync {
    /// Deliver one notice.
    fn notify(&self, notice: Notice);
}

/// Writes notices to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_destructive() {
            tracing::warn!(title = %notice.title, "{}", notice.description);
        } else {
            tracing::info!(title = %notice.title, "{}", notice.description);
        }
    }
}

/// Collects notices in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every notice recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut notices| std::mem::take(&mut *notices))
            .unwrap_or_default()
    }

    /// Titles of the notices recorded so far, oldest first.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|notices| notices.iter().map(|n| n.title.clone()).collect())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
