//! Overlay window domain — the full-screen capture surface.
//!
//! Holds the fixed window record, the window-handle trait the coordinator
//! drives, and the `Idle | Open` state that keeps at most one overlay alive.

mod state;
mod tauri_window;

pub use state::{OpenOverlay, OverlayState};
pub use tauri_window::build_overlay_window;

use crate::capture::Bounds;
use crate::error::Result;

/// Prefix for overlay window labels. Each window gets `<prefix>-<generation>`.
pub const OVERLAY_LABEL_PREFIX: &str = "screen-shot-overlay";

pub fn overlay_label(generation: u64) -> String {
    format!("{}-{}", OVERLAY_LABEL_PREFIX, generation)
}

/// Where the overlay page is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlaySource {
    /// Frontend dev server URL.
    DevServer(String),
    /// Page path inside the bundled frontend.
    Bundled(String),
}

/// Fixed configuration of the overlay window.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    pub title: String,
    pub source: OverlaySource,
    pub position: (f64, f64),
    pub size: (f64, f64),
    pub visible: bool,
    pub decorations: bool,
    pub fullscreen: bool,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub focused: bool,
    pub transparent: bool,
    pub always_on_top: bool,
    pub skip_taskbar: bool,
    /// RGBA; `#30000000` in ARGB notation.
    pub background: (u8, u8, u8, u8),
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            title: "screen-shot".to_string(),
            source: OverlaySource::Bundled(crate::config::BUNDLED_PAGE.to_string()),
            position: (0.0, 0.0),
            size: (0.0, 0.0),
            visible: false,
            decorations: false,
            fullscreen: true,
            resizable: false,
            minimizable: false,
            maximizable: false,
            focused: false,
            transparent: cfg!(any(target_os = "macos", target_os = "windows")),
            always_on_top: cfg!(target_os = "macos"),
            skip_taskbar: false,
            background: (0x00, 0x00, 0x00, 0x30),
        }
    }
}

/// A live overlay window as seen by the coordinator.
pub trait OverlayWindow {
    fn label(&self) -> &str;
    fn show(&self) -> Result<()>;
    fn hide(&self) -> Result<()>;
    fn focus(&self) -> Result<()>;
    fn set_bounds(&self, bounds: Bounds) -> Result<()>;
    fn bounds(&self) -> Result<Bounds>;
    /// Drop any full-screen state so the platform restores the desktop.
    fn leave_fullscreen(&self) -> Result<()>;
    /// Tear the window down. The handle must not be used afterwards.
    fn close(&self) -> Result<()>;
}
