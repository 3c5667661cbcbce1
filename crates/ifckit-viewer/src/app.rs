//! Viewer application state
//!
//! [`ViewerApp`] is the one aggregate the UI talks to. Every user event is a
//! [`UiAction`] passed to [`ViewerApp::dispatch`], and the UI re-renders from
//! [`ViewerApp::snapshot`].
//!
//! Notifications only record their deadline. The host event loop owns the
//! timer: after every action that can emit one, it runs
//! [`ViewerApp::auto_dismiss`] as a local task (`spawn_local` on a
//! `LocalSet`), since the app is single-threaded.

use crate::engine::{EngineFactory, HostSurface, ModelFile, ModelId, ViewerEngine};
use crate::filter::CategoryFilterSet;
use crate::notification::{Notification, NotificationDispatcher};
use crate::session::{InitOutcome, LoadOutcome, LoadRequest, SessionController, SessionOptions};
use crate::toggles::{ToggleState, ToggleStateManager};
use ifckit_core::{
    shared, AppEvent, EventBus, FilterEvent, NotificationEvent, Result, Shared, ToggleEvent,
    ToggleKind, UiEvent,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Open the side drawer
    OpenDrawer,
    /// Close the side drawer (also hides the filter panel)
    CloseDrawer,
    /// Show or hide the filter checkboxes (also opens the drawer)
    ToggleFilterPanel,
    /// Open the About dialog
    OpenAbout,
    /// Close the About dialog
    CloseAbout,
    /// A file was picked, or the picker was cancelled
    OpenFile(Option<ModelFile>),
    /// Activate one of the feature toggles
    Toggle(ToggleKind),
    /// A category checkbox changed
    SetCategoryIncluded {
        /// Category name as the checkbox reports it
        category: String,
        /// New checkbox state
        included: bool,
    },
    /// The user closed the notification
    DismissNotification,
}

/// Layout flags of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    /// Side drawer expanded
    pub drawer_open: bool,
    /// Filter checkboxes visible
    pub filter_panel_shown: bool,
    /// About dialog visible
    pub about_open: bool,
}

/// Everything the UI needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSnapshot {
    /// Engine exists
    pub initialized: bool,
    /// Model the engine shows
    pub loaded_model: Option<ModelId>,
    /// Current load request
    pub load: LoadRequest,
    /// Loading backdrop visible
    pub loading_indicator: bool,
    /// Clipping toggle
    pub clipping: ToggleState,
    /// Visibility toggle
    pub visibility: ToggleState,
    /// Selection toggle
    pub selection: ToggleState,
    /// Category filter
    pub filter: CategoryFilterSet,
    /// Visible notification
    pub notification: Option<Notification>,
    /// Layout flags
    pub panel: PanelState,
}

/// The viewer session aggregate
pub struct ViewerApp<E: ViewerEngine> {
    session: SessionController<E>,
    toggles: RefCell<ToggleStateManager>,
    filter: Cell<CategoryFilterSet>,
    notifications: Shared<NotificationDispatcher>,
    panel: Cell<PanelState>,
    bus: Arc<EventBus>,
}

impl<E: ViewerEngine> ViewerApp<E> {
    /// Create an app whose session is not yet initialized
    pub fn new(options: SessionOptions, bus: Arc<EventBus>) -> Self {
        let notifications = shared(NotificationDispatcher::new());
        Self {
            session: SessionController::new(options, Rc::clone(&notifications), Arc::clone(&bus)),
            toggles: RefCell::new(ToggleStateManager::new()),
            filter: Cell::new(CategoryFilterSet::new()),
            notifications,
            panel: Cell::new(PanelState::default()),
            bus,
        }
    }

    /// Initialize the session on `surface`; see [`SessionController::initialize`]
    pub fn initialize<F>(&self, surface: Option<&dyn HostSurface>, factory: &F) -> InitOutcome
    where
        F: EngineFactory<Engine = E>,
    {
        self.session.initialize(surface, factory)
    }

    /// Apply one user action
    ///
    /// Only an unrecognized category name is returned as an error; every
    /// other failure is absorbed into state.
    pub async fn dispatch(&self, action: UiAction) -> Result<()> {
        debug!("Dispatching {:?}", action);
        match action {
            UiAction::OpenDrawer => self.update_panel(|p| p.drawer_open = true),
            UiAction::CloseDrawer => self.update_panel(|p| {
                p.drawer_open = false;
                p.filter_panel_shown = false;
            }),
            UiAction::ToggleFilterPanel => self.update_panel(|p| {
                p.filter_panel_shown = !p.filter_panel_shown;
                p.drawer_open = true;
            }),
            UiAction::OpenAbout => self.update_panel(|p| p.about_open = true),
            UiAction::CloseAbout => self.update_panel(|p| p.about_open = false),
            UiAction::OpenFile(file) => {
                self.open_file(file.as_ref()).await;
            }
            UiAction::Toggle(kind) => {
                self.toggle(kind);
            }
            UiAction::SetCategoryIncluded { category, included } => {
                let mut filter = self.filter.get();
                let category = filter.set_included_by_name(&category, included)?;
                self.filter.set(filter);
                self.publish(AppEvent::Filter(FilterEvent::CategoryChanged {
                    category,
                    included,
                }));
            }
            UiAction::DismissNotification => {
                self.dismiss_notification();
            }
        }
        Ok(())
    }

    /// Load a picked file; see [`SessionController::load_model`]
    pub async fn open_file(&self, file: Option<&ModelFile>) -> LoadOutcome {
        self.session.load_model(file).await
    }

    /// Activate a toggle against the engine
    ///
    /// Returns `None` without touching any toggle while the session is
    /// uninitialized.
    pub fn toggle(&self, kind: ToggleKind) -> Option<ToggleState> {
        let Some(engine) = self.session.engine() else {
            debug!("Ignoring {} toggle: viewer not initialized", kind);
            return None;
        };
        let state = self.toggles.borrow_mut().activate(kind, engine.as_ref());
        self.publish(AppEvent::Toggle(ToggleEvent::Changed {
            kind,
            requested_on: state.requested_on,
            confirmed_on: state.confirmed_on,
        }));
        Some(state)
    }

    /// Dismiss the visible notification; idempotent
    pub fn dismiss_notification(&self) -> bool {
        let dismissed = self.notifications.borrow_mut().dismiss();
        if dismissed {
            self.publish(AppEvent::Notification(NotificationEvent::Dismissed));
        }
        dismissed
    }

    /// Wait out the visible notification's timer and dismiss it
    ///
    /// Nothing else expires notifications, so the host must run this after
    /// each emission. A notification superseded while waiting is left
    /// alone; its successor gets its own timer on the next call. Returns
    /// whether a dismissal happened.
    pub async fn auto_dismiss(&self) -> bool {
        let pending = {
            let notifications = self.notifications.borrow();
            notifications.active_id().zip(notifications.deadline())
        };
        let Some((id, deadline)) = pending else {
            return false;
        };

        tokio::time::sleep_until(deadline).await;

        let dismissed = self.notifications.borrow_mut().dismiss_if_current(id);
        if dismissed {
            self.publish(AppEvent::Notification(NotificationEvent::Dismissed));
        }
        dismissed
    }

    /// Current state for rendering
    pub fn snapshot(&self) -> AppSnapshot {
        let toggles = self.toggles.borrow();
        AppSnapshot {
            initialized: self.session.is_initialized(),
            loaded_model: self.session.loaded_model(),
            load: self.session.load_request(),
            loading_indicator: self.session.is_loading_indicator_visible(),
            clipping: toggles.get(ToggleKind::Clipping),
            visibility: toggles.get(ToggleKind::Visibility),
            selection: toggles.get(ToggleKind::Selection),
            filter: self.filter.get(),
            notification: self.notifications.borrow().active().cloned(),
            panel: self.panel.get(),
        }
    }

    /// The session controller
    pub fn session(&self) -> &SessionController<E> {
        &self.session
    }

    /// The event bus state changes are published on
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    fn update_panel(&self, change: impl FnOnce(&mut PanelState)) {
        let before = self.panel.get();
        let mut after = before;
        change(&mut after);
        self.panel.set(after);

        if before.drawer_open != after.drawer_open {
            self.publish(AppEvent::Ui(UiEvent::DrawerChanged {
                open: after.drawer_open,
            }));
        }
        if before.filter_panel_shown != after.filter_panel_shown {
            self.publish(AppEvent::Ui(UiEvent::FilterPanelChanged {
                shown: after.filter_panel_shown,
            }));
        }
        if before.about_open != after.about_open {
            self.publish(AppEvent::Ui(UiEvent::AboutDialogChanged {
                open: after.about_open,
            }));
        }
    }

    fn publish(&self, event: AppEvent) {
        self.bus.publish(event).ok();
    }
}
