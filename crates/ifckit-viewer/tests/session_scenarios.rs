//! Load lifecycle scenarios against a scripted engine

mod common;

use common::{Harness, TestSurface};
use ifckit_core::{EngineError, Rgb, Severity, ViewerError};
use ifckit_viewer::{
    EngineOptions, InitOutcome, LoadOutcome, LoadStatus, ModelFile, ModelHandle, ModelId,
    UiAction, LOAD_FAILURE_MESSAGE, LOAD_SUCCESS_MESSAGE,
};
use std::time::Duration;

#[test]
fn test_initialize_configures_scene() {
    let harness = Harness::new();
    let outcome = harness
        .app
        .initialize(Some(&TestSurface { mounted: true }), &harness.factory);

    assert_eq!(outcome, InitOutcome::Initialized);
    assert!(harness.app.snapshot().initialized);
    assert!(harness.script.axes.get());
    assert!(harness.script.grid.get());
    assert_eq!(harness.script.background.get(), Some(Rgb::WHITE));
    assert_eq!(
        harness.script.options.get(),
        Some(EngineOptions {
            coordinate_to_origin: true,
            fast_booleans: false,
        })
    );
}

#[test]
fn test_initialize_defers_without_surface() {
    let harness = Harness::new();

    assert_eq!(
        harness.app.initialize(None, &harness.factory),
        InitOutcome::Deferred
    );
    assert_eq!(
        harness
            .app
            .initialize(Some(&TestSurface { mounted: false }), &harness.factory),
        InitOutcome::Deferred
    );
    assert!(!harness.app.snapshot().initialized);
    assert_eq!(harness.script.created.get(), 0);

    // Retry once the surface mounts
    assert_eq!(
        harness
            .app
            .initialize(Some(&TestSurface { mounted: true }), &harness.factory),
        InitOutcome::Initialized
    );
}

#[test]
fn test_initialize_only_once() {
    let harness = Harness::initialized();
    assert_eq!(
        harness
            .app
            .initialize(Some(&TestSurface { mounted: true }), &harness.factory),
        InitOutcome::AlreadyInitialized
    );
    assert_eq!(harness.script.created.get(), 1);
}

#[tokio::test]
async fn test_load_before_initialize_does_nothing() {
    let harness = Harness::new();
    let before = harness.app.snapshot();

    let outcome = harness
        .app
        .open_file(Some(&ModelFile::new("model.ifc")))
        .await;

    assert_eq!(outcome, LoadOutcome::Rejected(ViewerError::NotInitialized));
    assert_eq!(harness.app.snapshot(), before);
    assert_eq!(harness.script.load_calls.get(), 0);
    assert!(harness.trace().is_empty());
}

#[tokio::test]
async fn test_load_without_file_does_nothing() {
    let harness = Harness::initialized();
    let before = harness.app.snapshot();

    harness.app.dispatch(UiAction::OpenFile(None)).await.unwrap();

    assert_eq!(harness.app.snapshot(), before);
    assert_eq!(harness.app.snapshot().load.status, LoadStatus::Idle);
    assert_eq!(harness.script.load_calls.get(), 0);
    assert!(harness.trace().is_empty());
}

#[tokio::test]
async fn test_successful_load_sequence() {
    let harness = Harness::initialized();

    let outcome = harness
        .app
        .open_file(Some(&ModelFile::new("model.ifc")))
        .await;

    assert_eq!(outcome, LoadOutcome::Succeeded(ModelId(7)));
    assert_eq!(
        harness.trace(),
        vec![
            "Loading model.ifc",
            "Loading indicator shown",
            "engine load model.ifc",
            "engine shadow 7",
            "Loaded model.ifc as model 7",
            "Loading indicator hidden",
            "Notification (success): IFC File loaded successfully!",
        ]
    );

    let snapshot = harness.app.snapshot();
    assert_eq!(snapshot.load.status, LoadStatus::Succeeded);
    assert_eq!(snapshot.load.error_message, None);
    assert_eq!(snapshot.loaded_model, Some(ModelId(7)));
    assert!(!snapshot.loading_indicator);
    assert_eq!(*harness.script.shadow_calls.borrow(), vec![ModelId(7)]);

    let notification = snapshot.notification.expect("notification");
    assert_eq!(notification.severity, Severity::Success);
    assert_eq!(notification.message, LOAD_SUCCESS_MESSAGE);
    assert_eq!(notification.auto_dismiss, Duration::from_millis(6000));
}

#[tokio::test]
async fn test_failed_load_shows_generic_message() {
    let harness = Harness::initialized();
    harness.script.push_result(Err(EngineError::parse("Parse failed")));

    let outcome = harness
        .app
        .open_file(Some(&ModelFile::new("broken.ifc")))
        .await;

    assert_eq!(
        outcome,
        LoadOutcome::Failed(ViewerError::LoadFailure {
            message: "Parse failed".to_string()
        })
    );

    let snapshot = harness.app.snapshot();
    assert_eq!(snapshot.load.status, LoadStatus::Failed);
    assert_eq!(snapshot.load.error_message.as_deref(), Some("Parse failed"));
    assert!(!snapshot.loading_indicator);
    assert_eq!(snapshot.loaded_model, None);
    assert!(harness.script.shadow_calls.borrow().is_empty());

    let notification = snapshot.notification.expect("notification");
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, LOAD_FAILURE_MESSAGE);
    assert!(!notification.message.contains("Parse failed"));

    let trace = harness.trace();
    assert_eq!(
        &trace[trace.len() - 3..],
        &[
            "Failed to load broken.ifc: Parse failed",
            "Loading indicator hidden",
            "Notification (error): Error loading the IFC File. Check the console for more information.",
        ]
    );
}

#[tokio::test]
async fn test_overlapping_load_is_rejected() {
    let harness = Harness::initialized();
    let (entered, release) = harness.script.hold_next_load();
    let first = ModelFile::new("first.ifc");
    let second = ModelFile::new("second.ifc");

    let driver = async {
        entered.await.expect("engine entered");

        let snapshot = harness.app.snapshot();
        assert_eq!(snapshot.load.status, LoadStatus::Loading);
        assert!(snapshot.loading_indicator);
        assert!(snapshot.notification.is_none());

        let rejected = harness.app.open_file(Some(&second)).await;
        release.send(()).expect("release");
        rejected
    };

    let (first_outcome, second_outcome) =
        tokio::join!(harness.app.open_file(Some(&first)), driver);

    assert_eq!(first_outcome, LoadOutcome::Succeeded(ModelId(7)));
    assert_eq!(
        second_outcome,
        LoadOutcome::Rejected(ViewerError::LoadInProgress)
    );
    assert_eq!(harness.script.load_calls.get(), 1);
    assert_eq!(harness.app.snapshot().load.status, LoadStatus::Succeeded);
    assert!(!harness
        .trace()
        .iter()
        .any(|entry| entry.contains("second.ifc")));
}

#[tokio::test]
async fn test_every_terminal_load_emits_one_notification() {
    let harness = Harness::initialized();
    harness.script.push_result(Ok(ModelHandle { id: ModelId(1) }));
    harness.script.push_result(Err(EngineError::parse("bad geometry")));
    harness.script.push_result(Ok(ModelHandle { id: ModelId(2) }));

    let expected = [Severity::Success, Severity::Error, Severity::Success];
    for (i, severity) in expected.into_iter().enumerate() {
        harness
            .app
            .dispatch(UiAction::OpenFile(Some(ModelFile::new("model.ifc"))))
            .await
            .unwrap();

        let notifications: Vec<String> = harness
            .trace()
            .into_iter()
            .filter(|entry| entry.starts_with("Notification ("))
            .collect();
        assert_eq!(notifications.len(), i + 1);
        assert_eq!(
            harness.app.snapshot().notification.map(|n| n.severity),
            Some(severity)
        );
    }

    // A later load clears the previous error message
    assert_eq!(harness.app.snapshot().load.error_message, None);
    assert_eq!(harness.app.snapshot().loaded_model, Some(ModelId(2)));
}

#[tokio::test]
async fn test_dismiss_notification_action() {
    let harness = Harness::initialized();
    harness
        .app
        .open_file(Some(&ModelFile::new("model.ifc")))
        .await;

    harness
        .app
        .dispatch(UiAction::DismissNotification)
        .await
        .unwrap();
    assert!(harness.app.snapshot().notification.is_none());

    // Dismissing again is harmless
    harness
        .app
        .dispatch(UiAction::DismissNotification)
        .await
        .unwrap();
    assert_eq!(
        harness
            .trace()
            .iter()
            .filter(|entry| entry.as_str() == "Notification dismissed")
            .count(),
        1
    );
}
