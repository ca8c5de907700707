//! System tray icon.
//!
//! Left-click starts a capture. Right-click opens a menu with Capture and
//! Quit.

use tauri::{
    menu::{MenuBuilder, MenuItemBuilder},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager, Runtime,
};

use crate::messages::{Mailbox, Message};

fn request_capture<R: Runtime>(app: &AppHandle<R>) {
    log::info!("[TRAY] Capture requested");
    app.state::<Mailbox>().send(Message::ScreenShot);
}

/// A click reports both press and release; only the left release captures.
fn is_capture_click(button: MouseButton, state: MouseButtonState) -> bool {
    button == MouseButton::Left && state == MouseButtonState::Up
}

pub fn setup_tray<R: Runtime>(app: &AppHandle<R>) -> Result<(), Box<dyn std::error::Error>> {
    let capture_item = MenuItemBuilder::with_id("capture", "Capture Screen").build(app)?;
    let quit_item = MenuItemBuilder::with_id("quit", "Quit").build(app)?;
    let menu = MenuBuilder::new(app)
        .item(&capture_item)
        .separator()
        .item(&quit_item)
        .build()?;

    let mut tray = TrayIconBuilder::new()
        .tooltip("screen-shot — Click to capture")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(|tray_icon, event| {
            if let TrayIconEvent::Click {
                button,
                button_state,
                ..
            } = event
            {
                if is_capture_click(button, button_state) {
                    request_capture(tray_icon.app_handle());
                }
            }
        })
        .on_menu_event(|app, event| match event.id().as_ref() {
            "capture" => request_capture(app),
            "quit" => {
                log::info!("[TRAY] Quit requested");
                app.exit(0);
            }
            _ => {}
        });

    if let Some(icon) = app.default_window_icon() {
        tray = tray.icon(icon.clone().to_owned());
    }
    tray.build(app)?;

    log::info!("[TRAY] Ready");
    Ok(())
}
