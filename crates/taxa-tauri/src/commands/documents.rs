//! Document commands for the standalone upload and listing screens.

use std::sync::Arc;

use tauri::State;

use taxa_app::usecases::DocumentsError;
use taxa_core::documents::{DocumentRecord, StagedFile};

use crate::bootstrap::AppRuntime;
use crate::commands::error::localized_api_error;

/// Upload the whole batch as one multipart request; returns the path to
/// navigate to on success.
#[tauri::command]
pub async fn upload_documents(
    runtime: State<'_, Arc<AppRuntime>>,
    files: Vec<StagedFile>,
) -> Result<String, String> {
    let uc = runtime.usecases().upload_documents();
    match uc.execute(&files).await {
        Ok(route) => Ok(route.path().to_string()),
        Err(DocumentsError::Api(err)) => Err(localized_api_error(
            &runtime,
            &err,
            "onboarding.error_upload",
            "onboarding.error_connection",
        )
        .await),
        Err(err) => Err(err.to_string()),
    }
}

#[tauri::command]
pub async fn list_documents(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<DocumentRecord>, String> {
    let uc = runtime.usecases().list_documents();
    uc.execute().await.map_err(|err| err.to_string())
}
