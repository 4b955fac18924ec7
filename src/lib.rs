//! TAXA desktop client application shell.
//!
//! The interesting parts live in the workspace crates; this crate only owns
//! the Tauri context (config, icons, frontend assets) and hands it to the
//! integration layer.

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    taxa_tauri::bootstrap::run_app(tauri::generate_context!());
}
