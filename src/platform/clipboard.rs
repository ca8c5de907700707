//! System clipboard via arboard.
//!
//! arboard takes raw RGBA, so the encoded capture is decoded with `image`
//! first. Native access works from transparent webview windows where
//! `navigator.clipboard` does not.

use std::borrow::Cow;

use crate::capture::EncodedImage;
use crate::error::{Result, ScreenShotError};

/// Decode an encoded image into arboard's RGBA layout.
pub fn to_clipboard_pixels(image: &EncodedImage) -> Result<arboard::ImageData<'static>> {
    let decoded = image::load_from_memory(&image.bytes).map_err(|e| {
        ScreenShotError::Clipboard(format!("Failed to decode {}: {}", image.mime, e))
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Owned(rgba.into_raw()),
    })
}

/// Place the image on the system clipboard.
pub fn write_image_to_clipboard(image: &EncodedImage) -> Result<()> {
    let pixels = to_clipboard_pixels(image)?;
    let (width, height) = (pixels.width, pixels.height);

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ScreenShotError::Clipboard(e.to_string()))?;
    clipboard
        .set_image(pixels)
        .map_err(|e| ScreenShotError::Clipboard(e.to_string()))?;

    log::info!("[CAPTURE] Copied {}x{} image to clipboard", width, height);
    Ok(())
}

/// Decode and write on the blocking pool. Pixel conversion of a full-screen
/// capture and the native clipboard call are both slow.
pub fn spawn_clipboard_write(image: EncodedImage) -> tauri::async_runtime::JoinHandle<Result<()>> {
    tauri::async_runtime::spawn_blocking(move || write_image_to_clipboard(&image))
}
