//! screen-shot — Tauri application entry point.
//!
//! This is the app shell that wires the capture coordinator to Tauri.
//! No capture logic lives here — only module declarations, plugin
//! registration, state management, and the command registry.
//!
//! The pieces:
//!   - coordinator.rs — overlay lifecycle + message handling (ScreenShot)
//!   - messages.rs    — typed topics and the coordinator mailbox
//!   - bridge.rs      — Tauri events in, local events out
//!   - platform/      — Tauri, clipboard and dialog behind a trait
//!   - commands.rs, shortcut.rs, tray.rs — ways to start a capture

mod bridge;
pub mod capture;
mod commands;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod messages;
pub mod overlay;
pub mod platform;
mod shortcut;
mod tray;

pub use coordinator::{ScreenShot, ScreenShotOptions};
pub use error::ScreenShotError;

use config::Settings;
use platform::TauriPlatform;

/// Entry point — called by Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env.local → .env from the crate root.
    let project_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    'env_load: for env_file in [".env.local", ".env"] {
        let path = project_root.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    let settings = Settings::from_env().unwrap_or_else(|e| {
        log::error!("[CONFIG] {} — falling back to defaults", e);
        Settings::default()
    });
    log::info!("[CONFIG] {:?}", settings);

    let (mailbox, inbox) = messages::mailbox();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(mailbox.clone())
        .invoke_handler(tauri::generate_handler![
            commands::start_screen_shot,
            commands::close_screen_shot,
        ])
        .setup(move |app| {
            log::info!("screen-shot starting up");
            let handle = app.handle().clone();

            let mut coordinator = ScreenShot::new(
                ScreenShotOptions::from_settings(&settings),
                TauriPlatform::new(handle.clone(), mailbox.clone()),
                mailbox.clone(),
            );
            coordinator.subscribe(bridge::forward_events(handle.clone()));
            tauri::async_runtime::spawn(coordinator::run(coordinator, inbox));

            bridge::listen_overlay_topics(&handle, &mailbox);

            if let Some(hotkey) = &settings.hotkey {
                if let Err(e) = shortcut::register_capture_shortcut(&handle, hotkey, mailbox.clone()) {
                    log::error!("[HOTKEY] {}", e);
                }
            }

            tray::setup_tray(&handle)?;

            log::info!("Ready for captures");
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("Error building screen-shot");

    app.run(|_app, event| {
        // The app has no permanent window; closing the overlay must not
        // end the process. Explicit exits (tray Quit) carry a code.
        if let tauri::RunEvent::ExitRequested { api, code: None, .. } = event {
            api.prevent_exit();
        }
    });
}
