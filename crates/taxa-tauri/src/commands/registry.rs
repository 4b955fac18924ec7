//! Business-registry lookup command.

use std::sync::Arc;

use tauri::State;

use taxa_core::remote::IcoDetails;

use crate::bootstrap::AppRuntime;
use crate::commands::error::localized_api_error;

/// Look up an IČO for registration pre-fill. An unknown or malformed IČO is
/// a `valid: false` result, not an error.
#[tauri::command]
pub async fn lookup_ico(
    runtime: State<'_, Arc<AppRuntime>>,
    ico: String,
) -> Result<IcoDetails, String> {
    let uc = runtime.usecases().lookup_ico();
    match uc.execute(&ico).await {
        Ok(details) => Ok(details),
        Err(err) => Err(localized_api_error(
            &runtime,
            &err,
            "settings.connection_error",
            "settings.connection_error",
        )
        .await),
    }
}
