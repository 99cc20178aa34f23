//! Recruit Notification Channel
//!
//! Fire-and-forget user-facing messages (toasts) raised by route guards:
//! - Tracing-backed sink for production and local development
//! - Mock sink that captures notifications for tests
//!
//! Callers never consume a return value from `notify`; delivery problems are
//! the sink's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mock;

pub use mock::MockNotifier;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification configuration error: {0}")]
    Configuration(String),
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Notification with the time it was raised
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivered {
    pub notification: Notification,
    pub raised_at: DateTime<Utc>,
}

/// User-facing message sink
pub trait Notifier {
    /// Show a message to the user
    fn notify(&self, message: &str, severity: Severity);

    /// Show a prepared notification
    #[mutants::skip] // Delegates to notify()
    fn send(&self, notification: &Notification) {
        self.notify(&notification.message, notification.severity);
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

/// Notifier that writes every message to the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => {
                tracing::info!(severity = %severity, "{}", message)
            }
            Severity::Warning => tracing::warn!(severity = %severity, "{}", message),
            Severity::Error => tracing::error!(severity = %severity, "{}", message),
        }
    }
}

/// Notifier factory
pub struct NotifierFactory;

impl NotifierFactory {
    /// Create a notifier for the configured provider name
    pub fn create(provider: &str) -> Result<Box<dyn Notifier>, NotifyError> {
        match provider {
            "tracing" | "log" => {
                tracing::debug!("Creating tracing notifier");
                Ok(Box::new(TracingNotifier))
            }
            "mock" => {
                tracing::debug!("Creating mock notifier");
                Ok(Box::new(MockNotifier::new()))
            }
            provider => Err(NotifyError::Configuration(format!(
                "Unknown notify provider: {}. Supported providers: tracing, mock",
                provider
            ))),
        }
    }
}
