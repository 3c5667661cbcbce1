//! Notification auto-dismiss timing on a paused clock

mod common;

use common::Harness;
use ifckit_core::{EngineError, Severity};
use ifckit_viewer::ModelFile;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_notification_dismisses_after_six_seconds() {
    let harness = Harness::initialized();
    harness
        .app
        .open_file(Some(&ModelFile::new("model.ifc")))
        .await;
    let shown = Instant::now();

    assert!(harness.app.auto_dismiss().await);

    assert_eq!(shown.elapsed(), Duration::from_millis(6000));
    assert!(harness.app.snapshot().notification.is_none());
    assert_eq!(
        harness.trace().last().map(String::as_str),
        Some("Notification dismissed")
    );
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_beats_timer() {
    let harness = Harness::initialized();
    harness
        .app
        .open_file(Some(&ModelFile::new("model.ifc")))
        .await;

    let user = async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        harness.app.dismiss_notification()
    };
    let (timer_dismissed, user_dismissed) = tokio::join!(harness.app.auto_dismiss(), user);

    assert!(user_dismissed);
    assert!(!timer_dismissed);
    assert!(harness.app.snapshot().notification.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_superseded_timer_leaves_successor_visible() {
    let harness = Harness::initialized();
    harness.script.push_result(Err(EngineError::parse("bad header")));
    harness
        .app
        .open_file(Some(&ModelFile::new("first.ifc")))
        .await;
    let start = Instant::now();

    let second_load = async {
        tokio::time::sleep(Duration::from_millis(4000)).await;
        harness
            .app
            .open_file(Some(&ModelFile::new("second.ifc")))
            .await
    };
    let (first_timer, _) = tokio::join!(harness.app.auto_dismiss(), second_load);

    // The first timer fired at 6s but the success message replaced its target
    assert!(!first_timer);
    let visible = harness.app.snapshot().notification.expect("successor");
    assert_eq!(visible.severity, Severity::Success);

    // The successor runs its own full delay from its emission at 4s
    assert!(harness.app.auto_dismiss().await);
    assert_eq!(start.elapsed(), Duration::from_millis(10000));
}

#[tokio::test(start_paused = true)]
async fn test_host_task_dismisses_notification() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let harness = Rc::new(Harness::initialized());
            harness
                .app
                .open_file(Some(&ModelFile::new("model.ifc")))
                .await;
            let shown = Instant::now();

            let timer = {
                let harness = Rc::clone(&harness);
                tokio::task::spawn_local(async move { harness.app.auto_dismiss().await })
            };

            tokio::time::sleep(Duration::from_millis(5999)).await;
            assert!(harness.app.snapshot().notification.is_some());

            assert!(timer.await.unwrap());
            assert_eq!(shown.elapsed(), Duration::from_millis(6000));
            assert!(harness.app.snapshot().notification.is_none());
        })
        .await;
}
