//! # IfcKit Core
//!
//! Core types, errors, and the event bus shared by the IfcKit crates.
//! Provides the element category model, color handling, and the
//! publish/subscribe plumbing the viewer session reports through.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;

pub use data::{ElementCategory, ParseColorError, Rgb, Severity, ToggleKind};

pub use error::{EngineError, Result, ViewerError};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter,
    FilterEvent, ModelEvent, NotificationEvent, SessionEvent, SubscriptionId, ToggleEvent,
    UiEvent,
};

pub use types::{shared, Shared};
