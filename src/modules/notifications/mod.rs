// Notifications: user-facing feedback raised by the order screens.
//
// Delivery is fire-and-forget. The default sink writes to the tracing log;
// a UI shell plugs in its own toast surface through `Notifier`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// How long a notification stays visible unless told otherwise
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

/// A message for the notification surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Sink for user-visible notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let duration_ms = notification.duration.as_millis() as u64;
        match notification.severity {
            Severity::Error => error!(duration_ms, "{}", notification.message),
            Severity::Warning => warn!(duration_ms, "{}", notification.message),
            Severity::Success | Severity::Info => info!(
                severity = ?notification.severity,
                duration_ms,
                "{}",
                notification.message
            ),
        }
    }
}
