//! Centralized error mapping for commands.
//!
//! Commands return `Result<T, String>` towards the webview. The string is
//! what the user sees next to the triggering form: the backend's own message
//! when it sent one, otherwise the localized fallback for that action.

use taxa_core::i18n::{Language, Translator};
use taxa_core::remote::ApiError;

use crate::bootstrap::AppRuntime;

/// Fallback mapping for internal errors with no better message.
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}

/// Map a backend error to the user-facing message.
///
/// Transport failures always get the localized connection string and never
/// leak raw error detail; rejections show the server's message when present,
/// else the localized fallback for the action.
pub fn display_api_error(
    translator: &Translator,
    language: Language,
    err: &ApiError,
    fallback_key: &str,
    connection_key: &str,
) -> String {
    if err.is_transport() {
        return translator.translate(language, connection_key);
    }
    match err.server_message() {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => translator.translate(language, fallback_key),
    }
}

/// Convenience wrapper reading the active language from the runtime.
pub(crate) async fn localized_api_error(
    runtime: &AppRuntime,
    err: &ApiError,
    fallback_key: &str,
    connection_key: &str,
) -> String {
    let language = runtime.usecases().get_language().execute().await;
    display_api_error(
        &runtime.deps.translator,
        language,
        err,
        fallback_key,
        connection_key,
    )
}
