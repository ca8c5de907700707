//! Error type shared by the coordinator and its platform adapters.
//!
//! Tauri commands flatten these to `String` at the command boundary.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScreenShotError {
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid {topic} payload: {reason}")]
    InvalidPayload { topic: String, reason: String },

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Image payload is empty")]
    EmptyImage,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Overlay window error: {0}")]
    Window(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tauri::Error> for ScreenShotError {
    fn from(e: tauri::Error) -> Self {
        ScreenShotError::Window(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScreenShotError>;
