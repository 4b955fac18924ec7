//! Application entry.

use std::sync::Arc;

use crate::bootstrap::{logging, wiring, AppRuntime};
use crate::commands;

/// Build the runtime and run the Tauri application with the given context.
///
/// The context (config, assets) is generated in the root crate next to
/// `tauri.conf.json` and handed in from there.
pub fn run_app(context: tauri::Context<tauri::Wry>) {
    let deps = match wiring::build_deps() {
        Ok(deps) => deps,
        Err(err) => {
            // Logging is only initialized once the plugin registers below.
            eprintln!("failed to assemble application dependencies: {err}");
            panic!("failed to assemble application dependencies: {err}");
        }
    };
    let runtime = Arc::new(AppRuntime::new(deps));

    tauri::Builder::default()
        .plugin(logging::get_builder().build())
        .plugin(tauri_plugin_opener::init())
        .manage(runtime)
        .invoke_handler(tauri::generate_handler![
            commands::auth::login,
            commands::auth::register,
            commands::auth::logout,
            commands::session::session_gate,
            commands::session::current_user,
            commands::onboarding::onboarding_start,
            commands::onboarding::onboarding_submit_profile,
            commands::onboarding::onboarding_stage_file,
            commands::onboarding::onboarding_remove_file,
            commands::onboarding::onboarding_staged_files,
            commands::onboarding::onboarding_submit_documents,
            commands::onboarding::onboarding_skip_documents,
            commands::onboarding::onboarding_complete,
            commands::onboarding::onboarding_back,
            commands::documents::upload_documents,
            commands::documents::list_documents,
            commands::chat::chat_history,
            commands::chat::send_chat_message,
            commands::declaration::declaration_defaults,
            commands::declaration::declaration_summary,
            commands::gdpr::export_my_data,
            commands::gdpr::delete_account,
            commands::gdpr::privacy_info,
            commands::language::get_language,
            commands::language::set_language,
            commands::language::translate,
            commands::registry::lookup_ico,
        ])
        .run(context)
        .expect("error while running tauri application");
}
