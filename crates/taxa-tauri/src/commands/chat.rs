//! Chat commands.

use std::sync::Arc;

use tauri::State;

use taxa_core::chat::ChatMessage;

use crate::bootstrap::AppRuntime;

/// The conversation so far (seeds the localized greeting on first call).
#[tauri::command]
pub async fn chat_history(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<ChatMessage>, String> {
    Ok(runtime.chat().history().await)
}

/// Send one message and return the updated conversation.
///
/// Blank input is a no-op. Backend failures surface as an assistant entry
/// with a localized error string, never as a command error.
#[tauri::command]
pub async fn send_chat_message(
    runtime: State<'_, Arc<AppRuntime>>,
    message: String,
) -> Result<Vec<ChatMessage>, String> {
    runtime
        .chat()
        .send(&message)
        .await
        .map_err(crate::commands::map_err)
}
