//! # IfcKit Viewer
//!
//! The viewer session core: owns the connection to an external 3-D engine,
//! drives asynchronous model loads, confirms feature toggles against the
//! engine, keeps the element category filter, and surfaces transient
//! notifications. [`ViewerApp`] aggregates all of it behind a single
//! [`UiAction`] dispatch boundary.

pub mod app;
pub mod engine;
pub mod filter;
pub mod headless;
pub mod notification;
pub mod session;
pub mod toggles;

pub use app::{AppSnapshot, PanelState, UiAction, ViewerApp};
pub use engine::{
    EngineFactory, EngineOptions, HostSurface, ModelFile, ModelHandle, ModelId, ViewerEngine,
    IFC_EXTENSIONS,
};
pub use filter::CategoryFilterSet;
pub use headless::{HeadlessEngine, HeadlessFactory, HeadlessSurface, ModelSummary};
pub use notification::{
    Notification, NotificationDispatcher, NotificationId, LOAD_FAILURE_MESSAGE,
    LOAD_SUCCESS_MESSAGE,
};
pub use session::{InitOutcome, LoadOutcome, LoadRequest, LoadStatus, SessionController, SessionOptions};
pub use toggles::{ToggleState, ToggleStateManager};

pub use ifckit_core::{ElementCategory, Severity, ToggleKind, ViewerError};
