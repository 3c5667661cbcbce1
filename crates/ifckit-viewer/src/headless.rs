//! Headless viewer engine
//!
//! An engine without rendering, for the command-line viewer and for tests.
//! It reads the IFC STEP file, checks its framing, and counts the
//! entities of each [`ElementCategory`]. Shadows and clipping are tracked as
//! flags only.

use crate::engine::{
    EngineFactory, EngineOptions, HostSurface, ModelFile, ModelHandle, ModelId, ViewerEngine,
};
use async_trait::async_trait;
use ifckit_core::{ElementCategory, EngineError, Rgb};
use std::cell::{Cell, RefCell};

const STEP_HEADER: &str = "ISO-10303-21";
const STEP_TRAILER: &str = "END-ISO-10303-21";

/// What the headless engine learned about a loaded model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    /// Engine-assigned id
    pub id: ModelId,
    /// File display name
    pub name: String,
    /// Schema named in the header (`IFC2X3`, `IFC4`, ...)
    pub schema: Option<String>,
    /// Number of entity instances in the DATA section
    pub entity_count: usize,
    /// Instances per category, indexed by [`ElementCategory::index`]
    pub category_counts: [usize; ElementCategory::COUNT],
    /// Whether the drop shadow was rendered
    pub shadow_rendered: bool,
}

impl ModelSummary {
    /// Instances of `category`
    pub fn count(&self, category: ElementCategory) -> usize {
        self.category_counts[category.index()]
    }
}

#[derive(Debug, Default)]
struct SceneState {
    axes: bool,
    grid: bool,
    options: Option<EngineOptions>,
}

/// Engine that parses models but draws nothing
#[derive(Debug)]
pub struct HeadlessEngine {
    background: Rgb,
    scene: RefCell<SceneState>,
    model: RefCell<Option<ModelSummary>>,
    next_id: Cell<u32>,
    clipping_active: Cell<bool>,
}

impl HeadlessEngine {
    /// Create an engine with the given background
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            scene: RefCell::new(SceneState::default()),
            model: RefCell::new(None),
            next_id: Cell::new(0),
            clipping_active: Cell::new(false),
        }
    }

    /// Background color
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Whether axes and grid were added
    pub fn scene_aids(&self) -> (bool, bool) {
        let scene = self.scene.borrow();
        (scene.axes, scene.grid)
    }

    /// Loader options applied at configuration
    pub fn options(&self) -> Option<EngineOptions> {
        self.scene.borrow().options
    }

    /// Summary of the loaded model
    pub fn model(&self) -> Option<ModelSummary> {
        self.model.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ViewerEngine for HeadlessEngine {
    fn add_axes(&self) {
        self.scene.borrow_mut().axes = true;
    }

    fn add_grid(&self) {
        self.scene.borrow_mut().grid = true;
    }

    fn configure(&self, options: EngineOptions) {
        self.scene.borrow_mut().options = Some(options);
    }

    async fn load_model(
        &self,
        file: &ModelFile,
        _compute_shadow: bool,
    ) -> Result<ModelHandle, EngineError> {
        let content =
            tokio::fs::read_to_string(file.path())
                .await
                .map_err(|e| EngineError::Read {
                    path: file.path().display().to_string(),
                    reason: e.to_string(),
                })?;

        let parsed = parse_step(&content)?;
        let id = ModelId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        tracing::debug!(
            "Parsed {}: {} entities, schema {:?}",
            file.name(),
            parsed.entity_count,
            parsed.schema
        );

        // One model at a time: a new load replaces the previous one
        *self.model.borrow_mut() = Some(ModelSummary {
            id,
            name: file.name().to_string(),
            schema: parsed.schema,
            entity_count: parsed.entity_count,
            category_counts: parsed.category_counts,
            shadow_rendered: false,
        });
        Ok(ModelHandle { id })
    }

    async fn render_shadow(&self, model: ModelId) {
        if let Some(summary) = self.model.borrow_mut().as_mut().filter(|m| m.id == model) {
            summary.shadow_rendered = true;
        }
    }

    fn toggle_clipping_planes(&self) {
        if self.model.borrow().is_none() {
            tracing::debug!("No model loaded, clipping planes unavailable");
            return;
        }
        self.clipping_active.set(!self.clipping_active.get());
    }

    fn is_clipping_active(&self) -> bool {
        self.clipping_active.get()
    }

    fn is_selection_active(&self) -> bool {
        // Nothing can be picked without a rendered view
        false
    }
}

/// A surface that is always mounted
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    label: String,
}

impl HeadlessSurface {
    /// Create a surface with a label for logs
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl HostSurface for HeadlessSurface {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_mounted(&self) -> bool {
        true
    }
}

/// Creates [`HeadlessEngine`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessFactory;

impl EngineFactory for HeadlessFactory {
    type Engine = HeadlessEngine;

    fn create(
        &self,
        surface: &dyn HostSurface,
        background: Rgb,
    ) -> Result<HeadlessEngine, EngineError> {
        if !surface.is_mounted() {
            return Err(EngineError::SurfaceUnavailable {
                reason: format!("{} is not mounted", surface.label()),
            });
        }
        Ok(HeadlessEngine::new(background))
    }
}

#[derive(Debug, Default)]
struct ParsedStep {
    schema: Option<String>,
    entity_count: usize,
    category_counts: [usize; ElementCategory::COUNT],
}

fn parse_step(content: &str) -> Result<ParsedStep, EngineError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = StepRecords::new(content);

    if records.next() != Some(STEP_HEADER) {
        return Err(EngineError::parse("Missing ISO-10303-21 header"));
    }

    let mut parsed = ParsedStep::default();
    let mut in_data = false;
    let mut saw_data = false;
    let mut saw_trailer = false;

    for record in records {
        if record == STEP_TRAILER {
            saw_trailer = true;
            break;
        }
        if !in_data {
            if record.starts_with("FILE_SCHEMA") {
                parsed.schema = schema_name(record);
            } else if record == "DATA" {
                in_data = true;
                saw_data = true;
            }
            continue;
        }
        if record == "ENDSEC" {
            in_data = false;
            continue;
        }
        if let Some(entity) = entity_name(record) {
            parsed.entity_count += 1;
            if let Some(category) = ElementCategory::from_ifc_name(entity) {
                parsed.category_counts[category.index()] += 1;
            }
        }
    }

    if !saw_data {
        return Err(EngineError::parse("Missing DATA section"));
    }
    if !saw_trailer {
        return Err(EngineError::parse("Unexpected end of file"));
    }
    Ok(parsed)
}

/// Splits STEP text into `;`-terminated records, trimmed and without the
/// terminator
///
/// A `;` inside a quoted string does not end a record. An escaped quote
/// (`''`) toggles twice and leaves the string open. Trailing text with no
/// terminator is not a record.
struct StepRecords<'a> {
    rest: &'a str,
}

impl<'a> StepRecords<'a> {
    fn new(content: &'a str) -> Self {
        Self { rest: content }
    }
}

impl<'a> Iterator for StepRecords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let mut in_string = false;
            let end = self.rest.char_indices().find_map(|(i, c)| match c {
                '\'' => {
                    in_string = !in_string;
                    None
                }
                ';' if !in_string => Some(i),
                _ => None,
            })?;

            let record = self.rest[..end].trim();
            self.rest = &self.rest[end + 1..];
            if !record.is_empty() {
                return Some(record);
            }
        }
    }
}

/// `FILE_SCHEMA(('IFC2X3'))` → `IFC2X3`
fn schema_name(line: &str) -> Option<String> {
    let start = line.find('\'')? + 1;
    let len = line[start..].find('\'')?;
    Some(line[start..start + len].to_string())
}

/// `#12= IFCSLAB('...',...)` → `IFCSLAB`
fn entity_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    let (_, rhs) = rest.split_once('=')?;
    let rhs = rhs.trim_start();
    let end = rhs.find('(')?;
    Some(rhs[..end].trim_end())
}
