//! Host platform seam.
//!
//! The coordinator never talks to Tauri directly. It goes through
//! `Platform`, which the app implements with Tauri + arboard + the dialog
//! plugin (`TauriPlatform`) and tests implement with in-memory fakes.

mod clipboard;
mod tauri_host;

pub use clipboard::{spawn_clipboard_write, to_clipboard_pixels, write_image_to_clipboard};
pub use tauri_host::TauriPlatform;

use std::path::PathBuf;

use crate::capture::EncodedImage;
use crate::error::Result;
use crate::overlay::{OverlayOptions, OverlayWindow};

/// What the native save dialog should offer.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub title: String,
    /// (filter name, extensions)
    pub filters: Vec<(String, Vec<String>)>,
    pub file_name: String,
    pub directory: Option<PathBuf>,
}

/// Receives the chosen path, or `None` if the user cancelled.
pub type SaveCallback = Box<dyn FnOnce(Option<PathBuf>) + Send + 'static>;

pub trait Platform {
    type Window: OverlayWindow;

    /// Create a hidden overlay window carrying `label`.
    fn open_overlay(&self, label: &str, options: &OverlayOptions) -> Result<Self::Window>;

    /// Put `image` on the clipboard. Must not block the dispatcher; an
    /// implementation may finish the write later and report failures itself.
    fn write_clipboard_image(&self, image: &EncodedImage) -> Result<()>;

    /// Ask the user for a destination. Must not block; `done` may run later
    /// on another thread.
    fn choose_save_path(&self, request: SaveRequest, done: SaveCallback);
}
