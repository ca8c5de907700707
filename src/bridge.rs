//! Glue between Tauri's event system and the coordinator.
//!
//! Inbound: overlay webviews emit `ScreenShot::*` topics, which are parsed
//! and posted to the mailbox. Outbound: local coordinator events are logged
//! and re-emitted to every webview under their own names.

use tauri::{AppHandle, Emitter, Listener, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::events::ScreenShotEvent;
use crate::messages::{parse_topic, Mailbox, OVERLAY_TOPICS};

/// Subscribe to every overlay topic on the app-wide event bus.
pub fn listen_overlay_topics<R: Runtime>(app: &AppHandle<R>, mailbox: &Mailbox) {
    for topic in OVERLAY_TOPICS {
        let mailbox = mailbox.clone();
        app.listen_any(topic, move |event| match parse_topic(topic, event.payload()) {
            Ok(message) => {
                mailbox.send(message);
            }
            Err(e) => log::warn!("[BRIDGE] Dropping {}: {}", topic, e),
        });
    }
    log::info!("[BRIDGE] Listening on {} overlay topics", OVERLAY_TOPICS.len());
}

/// Listener that reports coordinator events to the user and the webviews.
pub fn forward_events<R: Runtime>(app: AppHandle<R>) -> impl Fn(&ScreenShotEvent) + Send + 'static {
    move |event| {
        match event {
            ScreenShotEvent::Capture(capture) => log::info!(
                "[BRIDGE] capture {}x{} at ({}, {})",
                capture.bounds.width,
                capture.bounds.height,
                capture.bounds.x,
                capture.bounds.y
            ),
            ScreenShotEvent::SaveFile { .. } => log::info!("[BRIDGE] saveFile"),
            ScreenShotEvent::Saved { path } => log::info!("[BRIDGE] saved {}", path.display()),
            ScreenShotEvent::SaveFailed { path, error } => {
                log::error!("[BRIDGE] saveFailed {}: {}", path.display(), error);
                app.dialog()
                    .message(format!("Could not save {}:\n{}", path.display(), error))
                    .title("Save failed")
                    .kind(MessageDialogKind::Error)
                    .show(|_| {});
            }
        }

        if let Err(e) = app.emit(event.name(), event.payload()) {
            log::warn!("[BRIDGE] Failed to emit {}: {}", event.name(), e);
        }
    }
}
