use ifckit::{
    init_logging, load_headless, ModelFile, SessionOptions, SettingsManager, ViewerConfig,
    BUILD_DATE, IFC_EXTENSIONS, VERSION,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    init_logging()?;
    tracing::info!("IfcKit {} (built {})", VERSION, BUILD_DATE);

    let config = SettingsManager::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings ({}), using defaults", e);
        ViewerConfig::default()
    });

    // With no argument, behave like the toolbar's open button
    let file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| {
            rfd::FileDialog::new()
                .add_filter("IFC", IFC_EXTENSIONS)
                .pick_file()
        })
        .map(ModelFile::new);

    let Some(file) = file else {
        tracing::info!("No file selected");
        return Ok(ExitCode::SUCCESS);
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(load_headless(SessionOptions::from(&config), file))?;

    for line in report.lines() {
        println!("{}", line);
    }

    Ok(if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
