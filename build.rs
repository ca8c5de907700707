//! Build script for the screen-shot Tauri app.
//!
//! Generates the Tauri context (config, capabilities, icons) consumed by
//! `tauri::generate_context!()`.

fn main() {
    tauri_build::build();
}
