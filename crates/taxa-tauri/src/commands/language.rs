//! Language commands.

use std::sync::Arc;

use tauri::State;

use taxa_core::i18n::Language;

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;

/// Active language tag (falls back to the default when nothing valid is
/// stored).
#[tauri::command]
pub async fn get_language(runtime: State<'_, Arc<AppRuntime>>) -> Result<String, String> {
    let language = runtime.usecases().get_language().execute().await;
    Ok(language.as_tag().to_string())
}

#[tauri::command]
pub async fn set_language(
    runtime: State<'_, Arc<AppRuntime>>,
    language: Language,
) -> Result<(), String> {
    let uc = runtime.usecases().set_language();
    uc.execute(language).await.map_err(map_err)
}

/// Resolve one dotted key in the active language; unresolved keys come back
/// verbatim.
#[tauri::command]
pub async fn translate(
    runtime: State<'_, Arc<AppRuntime>>,
    key: String,
) -> Result<String, String> {
    Ok(runtime.usecases().translate_key().execute(&key).await)
}
