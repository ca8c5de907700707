//! Capture coordinator — owns the overlay window and routes overlay messages.
//!
//! One `ScreenShot` lives for the whole process. It is driven exclusively
//! by `run`, which drains the mailbox on a single task, so the overlay
//! handle never needs a lock. Slow work (the save dialog, the file write)
//! happens elsewhere and comes back as another `Message`.

use std::path::PathBuf;

use crate::capture::{decode_data_url, Bounds, CapturePayload, EncodedImage};
use crate::config::Settings;
use crate::error::{Result, ScreenShotError};
use crate::events::{EventHub, ScreenShotEvent};
use crate::messages::{Inbox, Mailbox, Message};
use crate::overlay::{overlay_label, OverlayOptions, OverlayState, OverlayWindow};
use crate::platform::{Platform, SaveRequest};

/// Extensions offered in the save dialog.
pub const SAVE_EXTENSIONS: [&str; 3] = ["png", "jpg", "gif"];

/// Behavior fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenShotOptions {
    pub use_clipboard: bool,
    pub save_file: bool,
    pub file_prefix: String,
    pub save_directory: Option<PathBuf>,
    pub overlay: OverlayOptions,
}

impl Default for ScreenShotOptions {
    fn default() -> Self {
        Self {
            use_clipboard: true,
            save_file: true,
            file_prefix: crate::config::DEFAULT_FILE_PREFIX.to_string(),
            save_directory: None,
            overlay: OverlayOptions::default(),
        }
    }
}

impl ScreenShotOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            use_clipboard: settings.use_clipboard,
            save_file: settings.save_file,
            file_prefix: settings.file_prefix.clone(),
            save_directory: dirs::picture_dir(),
            overlay: settings.overlay_options(),
        }
    }
}

pub struct ScreenShot<P: Platform> {
    options: ScreenShotOptions,
    platform: P,
    state: OverlayState<P::Window>,
    generation: u64,
    events: EventHub,
    mailbox: Mailbox,
}

impl<P: Platform> ScreenShot<P> {
    /// `mailbox` must feed the `Inbox` this coordinator is run with; dialog
    /// and file-write completions are posted back through it.
    pub fn new(options: ScreenShotOptions, platform: P, mailbox: Mailbox) -> Self {
        Self {
            options,
            platform,
            state: OverlayState::Idle,
            generation: 0,
            events: EventHub::new(),
            mailbox,
        }
    }

    /// Register a listener for local events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&ScreenShotEvent) + Send + 'static,
    {
        self.events.subscribe(listener);
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Label of the live overlay, if any.
    pub fn current_label(&self) -> Option<&str> {
        self.state.current().map(|open| open.window.label())
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn handle(&mut self, message: Message) -> Result<()> {
        match message {
            Message::ScreenShot => self.screen_shot(),
            Message::Show(bounds) => self.show(bounds),
            Message::Hide => self.hide(),
            Message::Capture(payload) => self.on_capture(payload),
            Message::SaveFile { data_url } => self.on_save_file(data_url),
            Message::OverlayShown { label } => self.on_overlay_shown(&label),
            Message::OverlayClosed { label } => {
                self.on_overlay_closed(&label);
                Ok(())
            }
            Message::SaveTarget { path, image } => {
                self.on_save_target(path, image);
                Ok(())
            }
            Message::SaveFinished { path, result } => self.on_save_finished(path, result),
        }
    }

    /// Replace any live overlay with a fresh one.
    pub fn screen_shot(&mut self) -> Result<()> {
        if let Some(previous) = self.state.take() {
            log::info!(
                "[OVERLAY] Closing {} before starting a new capture",
                previous.window.label()
            );
            teardown(&previous.window)?;
        }

        self.generation += 1;
        let label = overlay_label(self.generation);
        let window = self.platform.open_overlay(&label, &self.options.overlay)?;
        self.state.open(window);
        log::info!("[OVERLAY] Opened {}", label);
        Ok(())
    }

    /// Reveal the overlay at `bounds`. No-op while idle.
    pub fn show(&mut self, bounds: Bounds) -> Result<()> {
        let Some(open) = self.state.current_mut() else {
            log::debug!("[OVERLAY] SHOW ignored, no overlay");
            return Ok(());
        };

        open.bounds = Some(bounds);
        open.window.show()?;
        open.window.set_bounds(bounds)?;
        open.window.focus()?;
        log::info!(
            "[OVERLAY] Showing {} at {}x{}+{}+{}",
            open.window.label(),
            bounds.width,
            bounds.height,
            bounds.x,
            bounds.y
        );
        Ok(())
    }

    /// Hide and destroy the overlay. No-op while idle.
    pub fn hide(&mut self) -> Result<()> {
        let Some(open) = self.state.take() else {
            log::debug!("[OVERLAY] HIDE ignored, no overlay");
            return Ok(());
        };
        log::info!("[OVERLAY] Hiding {}", open.window.label());
        teardown(&open.window)
    }

    /// Platform says the window became visible; undo any geometry reset.
    pub fn on_overlay_shown(&mut self, label: &str) -> Result<()> {
        let Some(open) = self.state.current_labelled(label) else {
            return Ok(());
        };
        let Some(bounds) = open.bounds else {
            return Ok(());
        };

        if open.window.bounds()? != bounds {
            log::debug!("[OVERLAY] Re-applying bounds to {}", label);
            open.window.set_bounds(bounds)?;
            open.window.focus()?;
        }
        Ok(())
    }

    /// Platform destroyed a window. Only the live one changes state.
    pub fn on_overlay_closed(&mut self, label: &str) {
        if self.state.current_labelled(label).is_some() {
            self.state.take();
            log::info!("[OVERLAY] {} closed by the platform", label);
        }
    }

    /// Finished capture from the overlay.
    pub fn on_capture(&mut self, payload: CapturePayload) -> Result<()> {
        let clipboard = if self.options.use_clipboard {
            decode_data_url(&payload.data_url)
                .and_then(|image| self.platform.write_clipboard_image(&image))
        } else {
            Ok(())
        };

        log::info!(
            "[CAPTURE] Region {}x{}+{}+{}",
            payload.bounds.width,
            payload.bounds.height,
            payload.bounds.x,
            payload.bounds.y
        );
        self.events.emit(ScreenShotEvent::Capture(payload));
        clipboard
    }

    /// Save request from the overlay. Opens the dialog if saving is enabled.
    pub fn on_save_file(&mut self, data_url: String) -> Result<()> {
        let requested = if self.options.save_file {
            self.request_save(&data_url)
        } else {
            log::debug!("[SAVE] Saving disabled, ignoring SAVEFILE");
            Ok(())
        };

        self.events.emit(ScreenShotEvent::SaveFile { data_url });
        requested
    }

    fn request_save(&self, data_url: &str) -> Result<()> {
        let image = decode_data_url(data_url)?;
        let request = self.save_request(&image);
        log::info!("[SAVE] Asking for a destination ({})", request.file_name);

        let mailbox = self.mailbox.clone();
        self.platform.choose_save_path(
            request,
            Box::new(move |path| {
                mailbox.send(Message::SaveTarget { path, image });
            }),
        );
        Ok(())
    }

    fn save_request(&self, image: &EncodedImage) -> SaveRequest {
        let epoch_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        SaveRequest {
            title: "Save image".to_string(),
            filters: vec![(
                "Images".to_string(),
                SAVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            )],
            file_name: format!(
                "{}-{}.{}",
                self.options.file_prefix,
                epoch_ms,
                image.extension()
            ),
            directory: self.options.save_directory.clone(),
        }
    }

    /// Dialog result. The write runs on a blocking worker and reports back.
    pub fn on_save_target(&mut self, path: Option<PathBuf>, image: EncodedImage) {
        let Some(path) = path else {
            log::info!("[SAVE] Dialog cancelled");
            return;
        };

        let mailbox = self.mailbox.clone();
        tauri::async_runtime::spawn_blocking(move || {
            let result = std::fs::write(&path, &image.bytes).map_err(|source| {
                ScreenShotError::Write {
                    path: path.clone(),
                    source,
                }
            });
            mailbox.send(Message::SaveFinished { path, result });
        });
    }

    /// Worker result. Failures become a `saveFailed` event and an error.
    pub fn on_save_finished(&mut self, path: PathBuf, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                log::info!("[SAVE] Wrote {}", path.display());
                self.events.emit(ScreenShotEvent::Saved { path });
                Ok(())
            }
            Err(e) => {
                self.events.emit(ScreenShotEvent::SaveFailed {
                    path,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }
}

/// Hide, leave full-screen, destroy. Only the final close can fail the call.
fn teardown<W: OverlayWindow>(window: &W) -> Result<()> {
    if let Err(e) = window.hide() {
        log::warn!("[OVERLAY] Failed to hide {}: {}", window.label(), e);
    }
    if let Err(e) = window.leave_fullscreen() {
        log::warn!("[OVERLAY] Failed to leave full-screen on {}: {}", window.label(), e);
    }
    window.close()
}

/// Dispatcher loop: the only place the coordinator runs.
pub async fn run<P: Platform>(mut coordinator: ScreenShot<P>, mut inbox: Inbox) {
    log::info!("[DISPATCH] Coordinator ready");
    while let Some(message) = inbox.recv().await {
        if let Err(e) = coordinator.handle(message) {
            log::error!("[DISPATCH] {}", e);
        }
    }
    log::info!("[DISPATCH] Mailbox closed, coordinator stopped");
}
