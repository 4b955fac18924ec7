//! GDPR commands for the settings screen.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tauri::State;

use taxa_app::usecases::{DataExport, GdprError};
use taxa_core::remote::DeletedData;

use crate::bootstrap::AppRuntime;
use crate::commands::error::localized_api_error;

#[tauri::command]
pub async fn export_my_data(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<DataExport, String> {
    let uc = runtime.usecases().export_my_data();
    match uc.execute().await {
        Ok(export) => Ok(export),
        Err(GdprError::Api(err)) => Err(localized_api_error(
            &runtime,
            &err,
            "settings.export_error",
            "settings.connection_error",
        )
        .await),
        Err(err) => Err(err.to_string()),
    }
}

/// Deletion receipt for the webview.
#[derive(Debug, Clone, Serialize)]
pub struct AccountDeletionDto {
    pub deleted: DeletedData,
    pub redirect: String,
}

#[tauri::command]
pub async fn delete_account(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<AccountDeletionDto, String> {
    let uc = runtime.usecases().delete_account();
    match uc.execute().await {
        Ok(outcome) => Ok(AccountDeletionDto {
            deleted: outcome.deleted,
            redirect: outcome.destination.path().to_string(),
        }),
        Err(GdprError::Api(err)) => Err(localized_api_error(
            &runtime,
            &err,
            "settings.delete_error",
            "settings.connection_error",
        )
        .await),
        Err(err) => Err(err.to_string()),
    }
}

/// Static privacy disclosure; needs no session.
#[tauri::command]
pub async fn privacy_info(runtime: State<'_, Arc<AppRuntime>>) -> Result<Value, String> {
    let uc = runtime.usecases().privacy_info();
    uc.execute().await.map_err(|err| err.to_string())
}
