//! Viewer session controller
//!
//! Owns the engine handle and drives each model load through
//! Idle → Loading → Succeeded | Failed. Every step of a load runs in a
//! fixed order: indicator on, engine build, shadow (on success), terminal
//! status, indicator off, notification.
//!
//! Methods take `&self` so a load can be in flight while the UI keeps
//! dispatching; state lives in cells and no borrow is held across an
//! `.await`.

use crate::engine::{EngineFactory, EngineOptions, HostSurface, ModelFile, ModelId, ViewerEngine};
use crate::notification::{Notification, NotificationDispatcher, DEFAULT_AUTO_DISMISS};
use ifckit_core::{
    AppEvent, EventBus, ModelEvent, NotificationEvent, Rgb, SessionEvent, Shared, UiEvent,
    ViewerError,
};
use ifckit_settings::ViewerConfig;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Settings the session applies to the engine and its notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Scene background
    pub background: Rgb,
    /// Add world axes on initialization
    pub show_axes: bool,
    /// Add the ground grid on initialization
    pub show_grid: bool,
    /// Loader options
    pub engine: EngineOptions,
    /// Request shadow computation with every load
    pub compute_shadow: bool,
    /// Auto-dismiss delay for load notifications
    pub notification_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            show_axes: true,
            show_grid: true,
            engine: EngineOptions::default(),
            compute_shadow: true,
            notification_timeout: DEFAULT_AUTO_DISMISS,
        }
    }
}

impl From<&ViewerConfig> for SessionOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            background: config.scene.background_color,
            show_axes: config.scene.show_axes,
            show_grid: config.scene.show_grid,
            engine: EngineOptions {
                coordinate_to_origin: config.loader.coordinate_to_origin,
                fast_booleans: config.loader.fast_booleans,
            },
            compute_shadow: config.loader.compute_shadow,
            notification_timeout: Duration::from_millis(config.notifications.auto_dismiss_ms),
        }
    }
}

/// Status of the current load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load attempted yet
    #[default]
    Idle,
    /// The engine is building a model
    Loading,
    /// The last load built a model
    Succeeded,
    /// The last load failed
    Failed,
}

impl LoadStatus {
    /// Whether the status ends a load
    pub fn is_terminal(self) -> bool {
        matches!(self, LoadStatus::Succeeded | LoadStatus::Failed)
    }
}

/// One load attempt's state, replaced wholesale on every transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadRequest {
    /// Where the attempt stands
    pub status: LoadStatus,
    /// Captured engine message for a failed attempt
    pub error_message: Option<String>,
}

impl LoadRequest {
    fn loading() -> Self {
        Self {
            status: LoadStatus::Loading,
            error_message: None,
        }
    }

    fn succeeded() -> Self {
        Self {
            status: LoadStatus::Succeeded,
            error_message: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            status: LoadStatus::Failed,
            error_message: Some(message),
        }
    }
}

/// Result of [`SessionController::initialize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The engine was created and configured
    Initialized,
    /// Already initialized; nothing changed
    AlreadyInitialized,
    /// The surface could not host an engine yet; retry when it mounts
    Deferred,
}

/// Result of [`SessionController::load_model`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file was chosen; nothing changed
    NoFile,
    /// A precondition failed (`NotInitialized` or `LoadInProgress`); nothing changed
    Rejected(ViewerError),
    /// The model was built
    Succeeded(ModelId),
    /// The engine failed (`LoadFailure`)
    Failed(ViewerError),
}

/// The live engine and the model it holds
struct ViewerSession<E> {
    engine: Rc<E>,
    loaded_model: Option<ModelId>,
}

/// Owns the engine handle and the load lifecycle
pub struct SessionController<E: ViewerEngine> {
    options: SessionOptions,
    session: RefCell<Option<ViewerSession<E>>>,
    load: RefCell<LoadRequest>,
    loading_indicator: Cell<bool>,
    notifications: Shared<NotificationDispatcher>,
    bus: Arc<EventBus>,
}

impl<E: ViewerEngine> SessionController<E> {
    /// Create an uninitialized controller
    pub fn new(
        options: SessionOptions,
        notifications: Shared<NotificationDispatcher>,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            options,
            session: RefCell::new(None),
            load: RefCell::new(LoadRequest::default()),
            loading_indicator: Cell::new(false),
            notifications,
            bus,
        }
    }

    /// Create the engine on `surface` and configure the scene
    ///
    /// A missing or unmounted surface, or a factory failure, leaves the
    /// session uninitialized so the caller can retry once the surface mounts.
    pub fn initialize<F>(&self, surface: Option<&dyn HostSurface>, factory: &F) -> InitOutcome
    where
        F: EngineFactory<Engine = E>,
    {
        if self.is_initialized() {
            debug!("Viewer already initialized");
            return InitOutcome::AlreadyInitialized;
        }

        let Some(surface) = surface.filter(|s| s.is_mounted()) else {
            debug!("Hosting surface not mounted, deferring initialization");
            self.publish(AppEvent::Session(SessionEvent::Deferred {
                reason: "surface not mounted".to_string(),
            }));
            return InitOutcome::Deferred;
        };

        let engine = match factory.create(surface, self.options.background) {
            Ok(engine) => engine,
            Err(e) => {
                debug!("Engine creation on {} deferred: {}", surface.label(), e);
                self.publish(AppEvent::Session(SessionEvent::Deferred {
                    reason: e.to_string(),
                }));
                return InitOutcome::Deferred;
            }
        };

        if self.options.show_axes {
            engine.add_axes();
        }
        if self.options.show_grid {
            engine.add_grid();
        }
        engine.configure(self.options.engine);

        *self.session.borrow_mut() = Some(ViewerSession {
            engine: Rc::new(engine),
            loaded_model: None,
        });
        info!("Viewer initialized on {}", surface.label());
        self.publish(AppEvent::Session(SessionEvent::Initialized {
            surface: surface.label().to_string(),
        }));
        InitOutcome::Initialized
    }

    /// Load `file` into the engine
    ///
    /// Absent files, an uninitialized session and a load already in flight
    /// are absorbed without any state change. Engine failures end in
    /// `Failed` and a generic error notification; the engine's message is
    /// logged and kept in the load request.
    pub async fn load_model(&self, file: Option<&ModelFile>) -> LoadOutcome {
        let Some(file) = file else {
            return LoadOutcome::NoFile;
        };

        let Some(engine) = self.engine() else {
            debug!("Ignoring load of {}: {}", file.name(), ViewerError::NotInitialized);
            return LoadOutcome::Rejected(ViewerError::NotInitialized);
        };

        if self.load.borrow().status == LoadStatus::Loading {
            debug!("Ignoring load of {}: {}", file.name(), ViewerError::LoadInProgress);
            return LoadOutcome::Rejected(ViewerError::LoadInProgress);
        }

        self.replace_load(LoadRequest::loading());
        self.publish(AppEvent::Model(ModelEvent::LoadStarted {
            file: file.name().to_string(),
        }));
        self.set_loading_indicator(true);

        let (outcome, notification) =
            match engine.load_model(file, self.options.compute_shadow).await {
                Ok(model) => {
                    engine.render_shadow(model.id).await;
                    if let Some(session) = self.session.borrow_mut().as_mut() {
                        session.loaded_model = Some(model.id);
                    }
                    self.replace_load(LoadRequest::succeeded());
                    info!("Loaded {} as model {}", file.name(), model.id);
                    self.publish(AppEvent::Model(ModelEvent::LoadSucceeded {
                        file: file.name().to_string(),
                        model_id: model.id.0,
                    }));
                    (LoadOutcome::Succeeded(model.id), Notification::load_succeeded())
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!("Failed to load {}: {}", file.name(), message);
                    self.replace_load(LoadRequest::failed(message.clone()));
                    self.publish(AppEvent::Model(ModelEvent::LoadFailed {
                        file: file.name().to_string(),
                        error: message,
                    }));
                    (LoadOutcome::Failed(e.into()), Notification::load_failed())
                }
            };

        self.set_loading_indicator(false);
        self.notify(notification.with_auto_dismiss(self.options.notification_timeout));
        outcome
    }

    /// Whether the engine exists
    pub fn is_initialized(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// The engine, once initialized
    ///
    /// Outside the session this is for read-only inspection; engine
    /// operations go through the controller and the toggle manager.
    pub fn engine(&self) -> Option<Rc<E>> {
        self.session.borrow().as_ref().map(|s| Rc::clone(&s.engine))
    }

    /// Id of the model the engine currently shows
    pub fn loaded_model(&self) -> Option<ModelId> {
        self.session.borrow().as_ref().and_then(|s| s.loaded_model)
    }

    /// Snapshot of the current load request
    pub fn load_request(&self) -> LoadRequest {
        self.load.borrow().clone()
    }

    /// Whether the loading backdrop is visible
    pub fn is_loading_indicator_visible(&self) -> bool {
        self.loading_indicator.get()
    }

    /// Options in effect
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn replace_load(&self, next: LoadRequest) {
        *self.load.borrow_mut() = next;
    }

    fn set_loading_indicator(&self, visible: bool) {
        self.loading_indicator.set(visible);
        self.publish(AppEvent::Ui(UiEvent::LoadingIndicator { visible }));
    }

    fn notify(&self, notification: Notification) {
        let event = NotificationEvent::Shown {
            severity: notification.severity,
            message: notification.message.clone(),
        };
        self.notifications.borrow_mut().emit(notification);
        self.publish(AppEvent::Notification(event));
    }

    fn publish(&self, event: AppEvent) {
        self.bus.publish(event).ok();
    }
}
