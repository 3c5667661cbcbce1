//! Single-slot transient notifications
//!
//! At most one notification is active. Emitting replaces the active one and
//! restarts its dismiss timer; dismissal is idempotent. There is no queue
//! and no history.

use ifckit_core::Severity;
use std::time::Duration;
use tokio::time::Instant;

/// Text shown after a successful load
pub const LOAD_SUCCESS_MESSAGE: &str = "IFC File loaded successfully!";

/// Text shown after a failed load; the engine's own message goes to the log
pub const LOAD_FAILURE_MESSAGE: &str =
    "Error loading the IFC File. Check the console for more information.";

/// Default auto-dismiss delay
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(6000);

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Success or error
    pub severity: Severity,
    /// User-facing text
    pub message: String,
    /// How long the message stays visible without user action
    pub auto_dismiss: Duration,
}

impl Notification {
    /// Create a notification with the default auto-dismiss delay
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            auto_dismiss: DEFAULT_AUTO_DISMISS,
        }
    }

    /// Override the auto-dismiss delay
    pub fn with_auto_dismiss(mut self, auto_dismiss: Duration) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    /// The message shown when a model loaded
    pub fn load_succeeded() -> Self {
        Self::new(Severity::Success, LOAD_SUCCESS_MESSAGE)
    }

    /// The generic message shown when a model failed to load
    pub fn load_failed() -> Self {
        Self::new(Severity::Error, LOAD_FAILURE_MESSAGE)
    }
}

/// Identifies one emission, so a stale timer cannot dismiss a newer message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone)]
struct ActiveNotification {
    id: NotificationId,
    notification: Notification,
    shown_at: Instant,
}

impl ActiveNotification {
    fn deadline(&self) -> Instant {
        self.shown_at + self.notification.auto_dismiss
    }
}

/// Holds the one visible notification
#[derive(Debug, Default)]
pub struct NotificationDispatcher {
    active: Option<ActiveNotification>,
    emitted: u64,
}

impl NotificationDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification`, replacing any active one, timed from now
    pub fn emit(&mut self, notification: Notification) -> NotificationId {
        self.emit_at(notification, Instant::now())
    }

    /// Show `notification` with its dismiss timer starting at `now`
    pub fn emit_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        self.emitted += 1;
        let id = NotificationId(self.emitted);
        if let Some(previous) = &self.active {
            tracing::trace!("Superseding notification: {}", previous.notification.message);
        }
        self.active = Some(ActiveNotification {
            id,
            notification,
            shown_at: now,
        });
        id
    }

    /// Dismiss the active notification
    ///
    /// Returns false when nothing was visible.
    pub fn dismiss(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Dismiss only if `id` is still the active notification
    pub fn dismiss_if_current(&mut self, id: NotificationId) -> bool {
        if self.active_id() == Some(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Dismiss the active notification if its timer has run out at `now`
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// The visible notification, if any
    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }

    /// Id of the visible notification, if any
    pub fn active_id(&self) -> Option<NotificationId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// When the visible notification dismisses itself
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(ActiveNotification::deadline)
    }

    /// Total number of notifications emitted so far
    pub fn emitted_count(&self) -> u64 {
        self.emitted
    }
}
