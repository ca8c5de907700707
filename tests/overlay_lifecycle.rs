//! Overlay lifecycle: one live window, idle no-ops, platform signals.

mod support;

use screen_shot_lib::capture::Bounds;
use screen_shot_lib::messages::Message;
use screen_shot_lib::ScreenShotError;

#[test]
fn repeated_captures_keep_a_single_live_overlay() {
    let mut h = support::harness(true, true);

    for _ in 0..5 {
        h.coordinator.screen_shot().unwrap();
        assert_eq!(h.shared.live().len(), 1);
    }

    assert_eq!(*h.shared.max_live.lock().unwrap(), 1);
    assert_eq!(h.coordinator.current_label(), Some("screen-shot-overlay-5"));

    // Old window is closed before the next one is opened.
    let journal = h.shared.journal();
    let closed = journal.iter().position(|e| e == "close:screen-shot-overlay-1").unwrap();
    let opened = journal.iter().position(|e| e == "open:screen-shot-overlay-2").unwrap();
    assert!(closed < opened);
}

#[test]
fn hide_while_idle_is_a_no_op_twice() {
    let mut h = support::harness(true, true);

    h.coordinator.hide().unwrap();
    h.coordinator.hide().unwrap();

    assert!(!h.coordinator.is_open());
    assert!(h.shared.journal().is_empty());
}

#[test]
fn hide_twice_after_capture_stays_idle() {
    let mut h = support::harness(true, true);
    h.coordinator.screen_shot().unwrap();

    h.coordinator.hide().unwrap();
    h.coordinator.hide().unwrap();

    assert!(!h.coordinator.is_open());
    assert!(h.shared.live().is_empty());
    assert_eq!(
        h.shared.journal(),
        vec![
            "open:screen-shot-overlay-1",
            "hide:screen-shot-overlay-1",
            "windowed:screen-shot-overlay-1",
            "close:screen-shot-overlay-1",
        ]
    );
}

#[test]
fn show_while_idle_creates_nothing() {
    let mut h = support::harness(true, true);

    h.coordinator.show(Bounds::new(0, 0, 800, 600)).unwrap();

    assert!(!h.coordinator.is_open());
    assert!(h.shared.journal().is_empty());
}

#[test]
fn show_positions_and_focuses_the_overlay() {
    let mut h = support::harness(true, true);
    h.coordinator.screen_shot().unwrap();

    h.coordinator
        .handle(Message::Show(Bounds::new(0, 0, 1920, 1080)))
        .unwrap();

    assert_eq!(
        &h.shared.journal()[1..],
        &[
            "show:screen-shot-overlay-1",
            "bounds:screen-shot-overlay-1:0,0,1920,1080",
            "focus:screen-shot-overlay-1",
        ]
    );
}

#[test]
fn shown_signal_restores_reset_geometry() {
    let mut h = support::harness(true, true);
    h.coordinator.screen_shot().unwrap();
    let bounds = Bounds::new(0, 0, 1920, 1080);
    h.coordinator.show(bounds).unwrap();

    // Platform resets the window on show.
    *h.shared.geometry.lock().unwrap() = Bounds::new(100, 100, 0, 0);
    let before = h.shared.journal().len();
    h.coordinator.on_overlay_shown("screen-shot-overlay-1").unwrap();

    assert_eq!(*h.shared.geometry.lock().unwrap(), bounds);
    assert_eq!(
        &h.shared.journal()[before..],
        &[
            "bounds:screen-shot-overlay-1:0,0,1920,1080",
            "focus:screen-shot-overlay-1",
        ]
    );
}

#[test]
fn shown_signal_without_drift_does_nothing() {
    let mut h = support::harness(true, true);
    h.coordinator.screen_shot().unwrap();
    h.coordinator.show(Bounds::new(0, 0, 640, 480)).unwrap();

    let before = h.shared.journal().len();
    h.coordinator.on_overlay_shown("screen-shot-overlay-1").unwrap();
    h.coordinator.on_overlay_shown("screen-shot-overlay-0").unwrap();

    assert_eq!(h.shared.journal().len(), before);
}

#[test]
fn stale_close_signal_is_ignored() {
    let mut h = support::harness(true, true);
    h.coordinator.screen_shot().unwrap();
    h.coordinator.screen_shot().unwrap();

    // Destroyed event from the replaced window arrives late.
    h.coordinator
        .handle(Message::OverlayClosed {
            label: "screen-shot-overlay-1".to_string(),
        })
        .unwrap();
    assert_eq!(h.coordinator.current_label(), Some("screen-shot-overlay-2"));

    h.coordinator
        .handle(Message::OverlayClosed {
            label: "screen-shot-overlay-2".to_string(),
        })
        .unwrap();
    assert!(!h.coordinator.is_open());
}

#[test]
fn failed_open_leaves_coordinator_idle() {
    let mut h = support::harness(true, true);
    *h.shared.fail_open.lock().unwrap() = true;

    let err = h.coordinator.screen_shot().unwrap_err();

    assert!(matches!(err, ScreenShotError::Window(_)));
    assert!(!h.coordinator.is_open());
}
