//! Global capture hotkey (default `ctrl+shift+a`).

use tauri::{AppHandle, Runtime};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::error::{Result, ScreenShotError};
use crate::messages::{Mailbox, Message};

pub fn parse_hotkey(hotkey: &str) -> Result<Shortcut> {
    hotkey
        .parse::<Shortcut>()
        .map_err(|e| ScreenShotError::Config(format!("Invalid hotkey {:?}: {}", hotkey, e)))
}

/// Install the shortcut plugin and bind `hotkey` to a new capture.
pub fn register_capture_shortcut<R: Runtime>(
    app: &AppHandle<R>,
    hotkey: &str,
    mailbox: Mailbox,
) -> Result<()> {
    let capture = parse_hotkey(hotkey)?;

    app.plugin(
        tauri_plugin_global_shortcut::Builder::new()
            .with_handler(move |_app, shortcut, event| {
                if shortcut == &capture && event.state() == ShortcutState::Pressed {
                    log::info!("[HOTKEY] Capture requested");
                    mailbox.send(Message::ScreenShot);
                }
            })
            .build(),
    )?;

    app.global_shortcut()
        .register(capture)
        .map_err(|e| ScreenShotError::Config(format!("Failed to register {}: {}", hotkey, e)))?;

    log::info!("[HOTKEY] Registered {}", hotkey);
    Ok(())
}
