//! Mock Notifier Implementation
//!
//! Captures notifications in memory so tests can assert on exactly what the
//! user would have seen. Clones share the same capture buffer.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::{Delivered, Notification, Notifier, Severity};

/// Mock notifier for testing
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    delivered: Arc<Mutex<Vec<Delivered>>>,
}

impl MockNotifier {
    /// Create a new mock notifier
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<Delivered>> {
        // Poisoned only if a test panicked mid-push; the buffer is still intact
        self.delivered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get all captured notifications, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.buffer()
            .iter()
            .map(|d| d.notification.clone())
            .collect()
    }

    /// Get all captured notifications with their timestamps
    pub fn delivered(&self) -> Vec<Delivered> {
        self.buffer().clone()
    }

    /// Get notifications of one severity
    pub fn with_severity(&self, severity: Severity) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|n| n.severity == severity)
            .collect()
    }

    /// Get the most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.buffer().last().map(|d| d.notification.clone())
    }

    /// Get count of notifications raised
    pub fn count(&self) -> usize {
        self.buffer().len()
    }

    /// Clear all captured notifications
    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::debug!(severity = %severity, "Mock notifier captured message");
        self.buffer().push(Delivered {
            notification: Notification::new(message, severity),
            raised_at: Utc::now(),
        });
    }
}
