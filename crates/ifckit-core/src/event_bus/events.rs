//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::data::{ElementCategory, Severity, ToggleKind};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Engine/session lifecycle
    Session(SessionEvent),
    /// Model load lifecycle
    Model(ModelEvent),
    /// Feature toggle changes
    Toggle(ToggleEvent),
    /// Category filter changes
    Filter(FilterEvent),
    /// Panel and indicator changes
    Ui(UiEvent),
    /// Transient notifications
    Notification(NotificationEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Session(_) => EventCategory::Session,
            AppEvent::Model(_) => EventCategory::Model,
            AppEvent::Toggle(_) => EventCategory::Toggle,
            AppEvent::Filter(_) => EventCategory::Filter,
            AppEvent::Ui(_) => EventCategory::Ui,
            AppEvent::Notification(_) => EventCategory::Notification,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Session(e) => e.description(),
            AppEvent::Model(e) => e.description(),
            AppEvent::Toggle(e) => e.description(),
            AppEvent::Filter(e) => e.description(),
            AppEvent::Ui(e) => e.description(),
            AppEvent::Notification(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Engine/session lifecycle events.
    Session,
    /// Model load events.
    Model,
    /// Feature toggle events.
    Toggle,
    /// Category filter events.
    Filter,
    /// Panel and indicator events.
    Ui,
    /// Notification events.
    Notification,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Session => write!(f, "Session"),
            EventCategory::Model => write!(f, "Model"),
            EventCategory::Toggle => write!(f, "Toggle"),
            EventCategory::Filter => write!(f, "Filter"),
            EventCategory::Ui => write!(f, "Ui"),
            EventCategory::Notification => write!(f, "Notification"),
        }
    }
}

/// Engine/session lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The engine was created on a hosting surface.
    Initialized {
        /// Label of the hosting surface.
        surface: String,
    },
    /// Initialization was postponed until the surface is available.
    Deferred {
        /// Why the engine could not be created yet.
        reason: String,
    },
}

impl SessionEvent {
    fn description(&self) -> String {
        match self {
            SessionEvent::Initialized { surface } => format!("Viewer initialized on {}", surface),
            SessionEvent::Deferred { reason } => format!("Viewer initialization deferred: {}", reason),
        }
    }
}

/// Model load events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelEvent {
    /// A load entered the Loading state.
    LoadStarted {
        /// Display name of the file.
        file: String,
    },
    /// The engine built the model.
    LoadSucceeded {
        /// Display name of the file.
        file: String,
        /// Engine-assigned model id.
        model_id: u32,
    },
    /// The engine reported a failure.
    LoadFailed {
        /// Display name of the file.
        file: String,
        /// Raw engine message.
        error: String,
    },
}

impl ModelEvent {
    fn description(&self) -> String {
        match self {
            ModelEvent::LoadStarted { file } => format!("Loading {}", file),
            ModelEvent::LoadSucceeded { file, model_id } => {
                format!("Loaded {} as model {}", file, model_id)
            }
            ModelEvent::LoadFailed { file, error } => format!("Failed to load {}: {}", file, error),
        }
    }
}

/// Feature toggle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToggleEvent {
    /// A toggle was activated and its state re-confirmed.
    Changed {
        /// Which toggle.
        kind: ToggleKind,
        /// State the user asked for.
        requested_on: bool,
        /// State the engine reported.
        confirmed_on: bool,
    },
}

impl ToggleEvent {
    fn description(&self) -> String {
        match self {
            ToggleEvent::Changed {
                kind,
                requested_on,
                confirmed_on,
            } => format!(
                "{}: requested {}, confirmed {}",
                kind,
                on_off(*requested_on),
                on_off(*confirmed_on)
            ),
        }
    }
}

/// Category filter events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterEvent {
    /// One category's inclusion flag was replaced.
    CategoryChanged {
        /// The category.
        category: ElementCategory,
        /// Whether it is now included.
        included: bool,
    },
}

impl FilterEvent {
    fn description(&self) -> String {
        match self {
            FilterEvent::CategoryChanged { category, included } => format!(
                "Filter {}: {}",
                category,
                if *included { "included" } else { "excluded" }
            ),
        }
    }
}

/// Panel and indicator events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The loading backdrop was shown or hidden.
    LoadingIndicator {
        /// Whether the backdrop is visible.
        visible: bool,
    },
    /// The side drawer opened or closed.
    DrawerChanged {
        /// Whether the drawer is open.
        open: bool,
    },
    /// The filter checkbox panel was shown or hidden.
    FilterPanelChanged {
        /// Whether the panel is shown.
        shown: bool,
    },
    /// The About dialog opened or closed.
    AboutDialogChanged {
        /// Whether the dialog is open.
        open: bool,
    },
}

impl UiEvent {
    fn description(&self) -> String {
        match self {
            UiEvent::LoadingIndicator { visible } => {
                format!("Loading indicator {}", if *visible { "shown" } else { "hidden" })
            }
            UiEvent::DrawerChanged { open } => format!("Drawer {}", open_closed(*open)),
            UiEvent::FilterPanelChanged { shown } => {
                format!("Filter panel {}", if *shown { "shown" } else { "hidden" })
            }
            UiEvent::AboutDialogChanged { open } => format!("About dialog {}", open_closed(*open)),
        }
    }
}

/// Notification events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationEvent {
    /// A notification became the active one.
    Shown {
        /// Severity of the notification.
        severity: Severity,
        /// User-facing text.
        message: String,
    },
    /// The active notification was dismissed.
    Dismissed,
}

impl NotificationEvent {
    fn description(&self) -> String {
        match self {
            NotificationEvent::Shown { severity, message } => {
                format!("Notification ({}): {}", severity, message)
            }
            NotificationEvent::Dismissed => "Notification dismissed".to_string(),
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn open_closed(value: bool) -> &'static str {
    if value {
        "opened"
    } else {
        "closed"
    }
}
