//! Authentication commands.

use std::sync::Arc;

use tauri::State;

use taxa_app::usecases::{AuthError, RegisterError, RegisterForm};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::LoginDto;
use crate::commands::error::localized_api_error;

#[tauri::command]
pub async fn login(
    runtime: State<'_, Arc<AppRuntime>>,
    email: String,
    password: String,
) -> Result<LoginDto, String> {
    let uc = runtime.usecases().login();
    match uc.execute(&email, &password).await {
        Ok(outcome) => Ok(outcome.into()),
        Err(AuthError::Api(err)) => Err(localized_api_error(
            &runtime,
            &err,
            "auth.login.error_invalid",
            "auth.login.error_connection",
        )
        .await),
        Err(err) => Err(err.to_string()),
    }
}

#[tauri::command]
pub async fn register(
    runtime: State<'_, Arc<AppRuntime>>,
    form: RegisterForm,
) -> Result<LoginDto, String> {
    let uc = runtime.usecases().register();
    match uc.execute(form).await {
        Ok(outcome) => Ok(outcome.into()),
        Err(RegisterError::PasswordMismatch) => Err(runtime
            .usecases()
            .translate_key()
            .execute("auth.register.error_password_mismatch")
            .await),
        Err(RegisterError::Api(err)) => Err(localized_api_error(
            &runtime,
            &err,
            "auth.register.error_registration",
            "auth.register.error_connection",
        )
        .await),
        Err(err) => Err(err.to_string()),
    }
}

/// Clear the session; returns the path to navigate to.
#[tauri::command]
pub async fn logout(runtime: State<'_, Arc<AppRuntime>>) -> Result<String, String> {
    let uc = runtime.usecases().logout();
    let route = uc.execute().await.map_err(crate::commands::map_err)?;
    Ok(route.path().to_string())
}
