//! Local events the coordinator raises for the embedding application.
//!
//! Listeners are plain callbacks: fire-and-forget, no return value.

use std::path::PathBuf;

use serde_json::json;

use crate::capture::CapturePayload;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenShotEvent {
    /// A capture arrived from the overlay (emitted whether or not the
    /// clipboard was written).
    Capture(CapturePayload),
    /// A save was requested from the overlay.
    SaveFile { data_url: String },
    /// The chosen file was written.
    Saved { path: PathBuf },
    /// Writing the chosen file failed.
    SaveFailed { path: PathBuf, error: String },
}

impl ScreenShotEvent {
    /// Event name, as re-emitted to webviews.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenShotEvent::Capture(_) => "capture",
            ScreenShotEvent::SaveFile { .. } => "saveFile",
            ScreenShotEvent::Saved { .. } => "saved",
            ScreenShotEvent::SaveFailed { .. } => "saveFailed",
        }
    }

    /// JSON body for webview listeners.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            ScreenShotEvent::Capture(capture) => json!({
                "dataUrl": capture.data_url,
                "bounds": capture.bounds,
            }),
            ScreenShotEvent::SaveFile { data_url } => json!({ "dataUrl": data_url }),
            ScreenShotEvent::Saved { path } => json!({ "path": path.to_string_lossy() }),
            ScreenShotEvent::SaveFailed { path, error } => json!({
                "path": path.to_string_lossy(),
                "error": error,
            }),
        }
    }
}

type Listener = Box<dyn Fn(&ScreenShotEvent) + Send + 'static>;

/// Observer registry. Listeners run in registration order.
#[derive(Default)]
pub struct EventHub {
    listeners: Vec<Listener>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&ScreenShotEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&self, event: ScreenShotEvent) {
        log::debug!("[EVENT] {}", event.name());
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
