//! Tauri command handlers.
//!
//! Thin wrappers that let any webview start or dismiss a capture. They only
//! post to the coordinator's mailbox; the work happens on its task.

use crate::messages::{Mailbox, Message};

fn post(mailbox: &Mailbox, message: Message) -> Result<(), String> {
    if mailbox.send(message) {
        Ok(())
    } else {
        Err("Capture coordinator is not running".to_string())
    }
}

/// Tauri command: open a fresh capture overlay.
#[tauri::command]
pub fn start_screen_shot(mailbox: tauri::State<'_, Mailbox>) -> Result<(), String> {
    log::info!("[COMMAND] start_screen_shot");
    post(&mailbox, Message::ScreenShot)
}

/// Tauri command: dismiss the capture overlay, if one is open.
#[tauri::command]
pub fn close_screen_shot(mailbox: tauri::State<'_, Mailbox>) -> Result<(), String> {
    post(&mailbox, Message::Hide)
}
