//! Scripted engine shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use ifckit_core::{AppEvent, EngineError, EventBus, EventFilter, Rgb};
use ifckit_viewer::{
    EngineFactory, EngineOptions, HostSurface, ModelFile, ModelHandle, ModelId, SessionOptions,
    ViewerApp, ViewerEngine,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Ordered record of engine calls and published events
pub type Trace = Arc<Mutex<Vec<String>>>;

/// What the scripted engine does and what it saw
#[derive(Default)]
pub struct EngineScript {
    pub results: RefCell<VecDeque<Result<ModelHandle, EngineError>>>,
    pub entered: RefCell<Option<oneshot::Sender<()>>>,
    pub gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub accepts_clipping: Cell<bool>,
    pub clipping: Cell<bool>,
    pub selection: Cell<bool>,
    pub load_calls: Cell<usize>,
    pub shadow_calls: RefCell<Vec<ModelId>>,
    pub clipping_toggles: Cell<usize>,
    pub axes: Cell<bool>,
    pub grid: Cell<bool>,
    pub options: Cell<Option<EngineOptions>>,
    pub background: Cell<Option<Rgb>>,
    pub created: Cell<usize>,
    pub trace: Trace,
}

impl EngineScript {
    pub fn new() -> Rc<Self> {
        let script = Self::default();
        script.accepts_clipping.set(true);
        Rc::new(script)
    }

    pub fn push_result(&self, result: Result<ModelHandle, EngineError>) {
        self.results.borrow_mut().push_back(result);
    }

    /// Hold the next load inside the engine until the returned sender fires;
    /// the receiver resolves once the engine has been entered
    pub fn hold_next_load(&self) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        *self.entered.borrow_mut() = Some(entered_tx);
        *self.gate.borrow_mut() = Some(release_rx);
        (entered_rx, release_tx)
    }

    fn record(&self, entry: String) {
        self.trace.lock().unwrap().push(entry);
    }
}

pub struct ScriptedEngine {
    script: Rc<EngineScript>,
}

#[async_trait(?Send)]
impl ViewerEngine for ScriptedEngine {
    fn add_axes(&self) {
        self.script.axes.set(true);
    }

    fn add_grid(&self) {
        self.script.grid.set(true);
    }

    fn configure(&self, options: EngineOptions) {
        self.script.options.set(Some(options));
    }

    async fn load_model(
        &self,
        file: &ModelFile,
        _compute_shadow: bool,
    ) -> Result<ModelHandle, EngineError> {
        self.script.load_calls.set(self.script.load_calls.get() + 1);
        self.script.record(format!("engine load {}", file.name()));

        if let Some(entered) = self.script.entered.borrow_mut().take() {
            entered.send(()).ok();
        }
        let gate = self.script.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.await.ok();
        }

        let next = self.script.results.borrow_mut().pop_front();
        next.unwrap_or(Ok(ModelHandle { id: ModelId(7) }))
    }

    async fn render_shadow(&self, model: ModelId) {
        self.script.record(format!("engine shadow {}", model));
        self.script.shadow_calls.borrow_mut().push(model);
    }

    fn toggle_clipping_planes(&self) {
        self.script
            .clipping_toggles
            .set(self.script.clipping_toggles.get() + 1);
        if self.script.accepts_clipping.get() {
            self.script.clipping.set(!self.script.clipping.get());
        }
    }

    fn is_clipping_active(&self) -> bool {
        self.script.clipping.get()
    }

    fn is_selection_active(&self) -> bool {
        self.script.selection.get()
    }
}

pub struct ScriptedFactory {
    pub script: Rc<EngineScript>,
}

impl EngineFactory for ScriptedFactory {
    type Engine = ScriptedEngine;

    fn create(
        &self,
        surface: &dyn HostSurface,
        background: Rgb,
    ) -> Result<ScriptedEngine, EngineError> {
        if !surface.is_mounted() {
            return Err(EngineError::SurfaceUnavailable {
                reason: surface.label().to_string(),
            });
        }
        self.script.created.set(self.script.created.get() + 1);
        self.script.background.set(Some(background));
        Ok(ScriptedEngine {
            script: Rc::clone(&self.script),
        })
    }
}

pub struct TestSurface {
    pub mounted: bool,
}

impl HostSurface for TestSurface {
    fn label(&self) -> &str {
        "test-surface"
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

pub struct Harness {
    pub app: ViewerApp<ScriptedEngine>,
    pub script: Rc<EngineScript>,
    pub factory: ScriptedFactory,
}

impl Harness {
    /// App with an uninitialized session; every published event lands in the trace
    pub fn new() -> Self {
        let script = EngineScript::new();
        let bus = Arc::new(EventBus::new());
        let trace = Arc::clone(&script.trace);
        bus.subscribe(EventFilter::All, move |event: AppEvent| {
            trace.lock().unwrap().push(event.description());
        });
        Self {
            app: ViewerApp::new(SessionOptions::default(), bus),
            factory: ScriptedFactory {
                script: Rc::clone(&script),
            },
            script,
        }
    }

    /// App with an initialized session
    pub fn initialized() -> Self {
        let harness = Self::new();
        harness
            .app
            .initialize(Some(&TestSurface { mounted: true }), &harness.factory);
        harness.script.trace.lock().unwrap().clear();
        harness
    }

    pub fn trace(&self) -> Vec<String> {
        self.script.trace.lock().unwrap().clone()
    }
}
