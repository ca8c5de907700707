//! Runtime settings read from the environment.
//!
//! `.env.local` / `.env` are loaded into the process environment at startup
//! (see `lib.rs`), so every setting can come from either place:
//!
//!   SCREEN_SHOT_MODE           development | production (default: build profile)
//!   SCREEN_SHOT_DEV_URL        overlay address in development (default http://localhost:8080)
//!   SCREEN_SHOT_USE_CLIPBOARD  copy captures to the clipboard (default true)
//!   SCREEN_SHOT_SAVE_FILE      offer a save dialog on SAVEFILE (default true)
//!   SCREEN_SHOT_HOTKEY         global capture shortcut, empty disables (default ctrl+shift+a)
//!   SCREEN_SHOT_FILE_PREFIX    suggested file name prefix (default screenshot)

use crate::error::{Result, ScreenShotError};
use crate::overlay::{OverlayOptions, OverlaySource};

pub const DEFAULT_DEV_URL: &str = "http://localhost:8080";
pub const DEFAULT_HOTKEY: &str = "ctrl+shift+a";
pub const DEFAULT_FILE_PREFIX: &str = "screenshot";
/// Overlay page inside the bundled frontend.
pub const BUNDLED_PAGE: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    fn from_build() -> Self {
        if cfg!(debug_assertions) {
            RunMode::Development
        } else {
            RunMode::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mode: RunMode,
    pub dev_url: String,
    pub use_clipboard: bool,
    pub save_file: bool,
    pub hotkey: Option<String>,
    pub file_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: RunMode::from_build(),
            dev_url: DEFAULT_DEV_URL.to_string(),
            use_clipboard: true,
            save_file: true,
            hotkey: Some(DEFAULT_HOTKEY.to_string()),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup. Unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(mode) = lookup("SCREEN_SHOT_MODE") {
            settings.mode = match mode.trim().to_lowercase().as_str() {
                "development" | "dev" => RunMode::Development,
                "production" | "prod" => RunMode::Production,
                other => {
                    return Err(ScreenShotError::Config(format!(
                        "SCREEN_SHOT_MODE must be development or production, got {:?}",
                        other
                    )))
                }
            };
        }
        if let Some(url) = lookup("SCREEN_SHOT_DEV_URL") {
            if !url.trim().is_empty() {
                settings.dev_url = url.trim().to_string();
            }
        }
        if let Some(flag) = lookup("SCREEN_SHOT_USE_CLIPBOARD") {
            settings.use_clipboard = parse_flag("SCREEN_SHOT_USE_CLIPBOARD", &flag)?;
        }
        if let Some(flag) = lookup("SCREEN_SHOT_SAVE_FILE") {
            settings.save_file = parse_flag("SCREEN_SHOT_SAVE_FILE", &flag)?;
        }
        if let Some(hotkey) = lookup("SCREEN_SHOT_HOTKEY") {
            let hotkey = hotkey.trim();
            settings.hotkey = (!hotkey.is_empty()).then(|| hotkey.to_string());
        }
        if let Some(prefix) = lookup("SCREEN_SHOT_FILE_PREFIX") {
            if !prefix.trim().is_empty() {
                settings.file_prefix = prefix.trim().to_string();
            }
        }

        Ok(settings)
    }

    /// Window record for the capture overlay in the current mode.
    pub fn overlay_options(&self) -> OverlayOptions {
        let production = self.mode == RunMode::Production;
        let source = match self.mode {
            RunMode::Development => OverlaySource::DevServer(self.dev_url.clone()),
            RunMode::Production => OverlaySource::Bundled(BUNDLED_PAGE.to_string()),
        };
        OverlayOptions {
            source,
            always_on_top: production || cfg!(target_os = "macos"),
            skip_taskbar: production,
            ..OverlayOptions::default()
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ScreenShotError::Config(format!(
            "{} must be a boolean, got {:?}",
            key, other
        ))),
    }
}
