//! One-shot load for the command line

use ifckit_core::{ElementCategory, EventBus};
use ifckit_viewer::{
    HeadlessEngine, HeadlessFactory, HeadlessSurface, InitOutcome, LoadStatus, ModelFile,
    ModelSummary, Notification, SessionOptions, UiAction, ViewerApp,
};
use std::sync::Arc;

/// What a single headless load produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Terminal status of the load
    pub status: LoadStatus,
    /// Notification the session emitted
    pub notification: Option<Notification>,
    /// Summary of the model, when it loaded
    pub model: Option<ModelSummary>,
}

impl LoadReport {
    /// Whether the model loaded
    pub fn succeeded(&self) -> bool {
        self.status == LoadStatus::Succeeded
    }

    /// Text printed for the user: the notification, then per-category counts
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .notification
            .iter()
            .map(|n| n.message.clone())
            .collect();

        if let Some(model) = &self.model {
            lines.push(format!(
                "{} ({}): {} entities",
                model.name,
                model.schema.as_deref().unwrap_or("unknown schema"),
                model.entity_count
            ));
            lines.extend(ElementCategory::ALL.into_iter().map(|category| {
                format!("  {:<20} {}", category.ifc_name(), model.count(category))
            }));
        }
        lines
    }
}

/// Run a headless session that loads `file` once
pub async fn load_headless(
    options: SessionOptions,
    file: ModelFile,
) -> anyhow::Result<LoadReport> {
    let app: ViewerApp<HeadlessEngine> = ViewerApp::new(options, Arc::new(EventBus::new()));

    if app.initialize(Some(&HeadlessSurface::new("terminal")), &HeadlessFactory)
        != InitOutcome::Initialized
    {
        anyhow::bail!("Viewer could not be initialized");
    }

    if !file.has_ifc_extension() {
        tracing::warn!("{} does not have an .ifc extension", file.name());
    }

    app.dispatch(UiAction::OpenFile(Some(file))).await?;

    let snapshot = app.snapshot();
    let model = if snapshot.load.status == LoadStatus::Succeeded {
        app.session().engine().and_then(|engine| engine.model())
    } else {
        None
    };

    Ok(LoadReport {
        status: snapshot.load.status,
        notification: snapshot.notification,
        model,
    })
}
