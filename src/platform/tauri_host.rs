//! `Platform` backed by the running Tauri app.

use tauri::{AppHandle, Runtime, WebviewWindow, WindowEvent};
use tauri_plugin_dialog::DialogExt;

use super::{Platform, SaveCallback, SaveRequest};
use crate::capture::EncodedImage;
use crate::error::Result;
use crate::messages::{Mailbox, Message};
use crate::overlay::{build_overlay_window, OverlayOptions};

pub struct TauriPlatform<R: Runtime> {
    app: AppHandle<R>,
    mailbox: Mailbox,
}

impl<R: Runtime> TauriPlatform<R> {
    /// Window signals are posted to `mailbox` so they reach the
    /// coordinator on its own task.
    pub fn new(app: AppHandle<R>, mailbox: Mailbox) -> Self {
        Self { app, mailbox }
    }
}

impl<R: Runtime> Platform for TauriPlatform<R> {
    type Window = WebviewWindow<R>;

    fn open_overlay(&self, label: &str, options: &OverlayOptions) -> Result<Self::Window> {
        let window = build_overlay_window(&self.app, label, options)?;

        let mailbox = self.mailbox.clone();
        let label = label.to_string();
        window.on_window_event(move |event| match event {
            // Focus arrives right after the window is actually shown.
            WindowEvent::Focused(true) => {
                mailbox.send(Message::OverlayShown {
                    label: label.clone(),
                });
            }
            WindowEvent::Destroyed => {
                mailbox.send(Message::OverlayClosed {
                    label: label.clone(),
                });
            }
            _ => {}
        });

        Ok(window)
    }

    fn write_clipboard_image(&self, image: &EncodedImage) -> Result<()> {
        let pending = super::spawn_clipboard_write(image.clone());
        tauri::async_runtime::spawn(async move {
            match pending.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::error!("[CAPTURE] Clipboard write failed: {}", e),
                Err(e) => log::error!("[CAPTURE] Clipboard task failed: {}", e),
            }
        });
        Ok(())
    }

    fn choose_save_path(&self, request: SaveRequest, done: SaveCallback) {
        let mut dialog = self
            .app
            .dialog()
            .file()
            .set_title(&request.title)
            .set_file_name(&request.file_name);
        for (name, extensions) in &request.filters {
            let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();
            dialog = dialog.add_filter(name, &extensions);
        }
        if let Some(directory) = &request.directory {
            dialog = dialog.set_directory(directory);
        }

        dialog.save_file(move |chosen| {
            let path = chosen.and_then(|p| match p.into_path() {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("[SAVE] Dialog returned a non-file path: {}", e);
                    None
                }
            });
            done(path);
        });
    }
}
