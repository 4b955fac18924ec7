//! Session commands.

use std::sync::Arc;

use tauri::State;

use taxa_core::ports::SessionStorePort;
use taxa_core::session::{Screen, UserRecord};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::GateDto;
use crate::commands::map_err;

/// Gate a protected screen. Called at every mount, before anything renders.
#[tauri::command]
pub async fn session_gate(
    runtime: State<'_, Arc<AppRuntime>>,
    screen: Screen,
) -> Result<GateDto, String> {
    let uc = runtime.usecases().session_gate();
    let gate = uc.execute(screen).await.map_err(map_err)?;
    Ok(gate.into())
}

/// The cached user record, if signed in. The token never crosses into the
/// webview.
#[tauri::command]
pub async fn current_user(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Option<UserRecord>, String> {
    let session = runtime
        .deps
        .session_store
        .load()
        .await
        .map_err(map_err)?;
    Ok(session.map(|session| session.user))
}
