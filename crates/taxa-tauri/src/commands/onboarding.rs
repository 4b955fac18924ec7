//! Onboarding wizard commands.
//!
//! All of them drive the runtime's shared orchestrator, so the wizard step
//! and the staged batch persist across invocations. Backend failures are not
//! command errors: they come back inside the view, as the step-local banner
//! text, and the user may simply re-trigger the action.

use std::sync::Arc;

use tauri::State;

use taxa_core::documents::StagedFile;
use taxa_core::onboarding::ProfileForm;

use taxa_app::usecases::OnboardingOutcome;

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{OnboardingViewDto, StagedFileSummaryDto};

async fn render(
    runtime: &AppRuntime,
    outcome: OnboardingOutcome,
) -> OnboardingViewDto {
    let language = runtime.usecases().get_language().execute().await;
    OnboardingViewDto::render(outcome, &runtime.deps.translator, language)
}

/// Enter the wizard: redirects unauthenticated users to login and finished
/// users to the dashboard, everyone else starts at step 1.
#[tauri::command]
pub async fn onboarding_start(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingViewDto, String> {
    let outcome = runtime
        .onboarding()
        .start()
        .await
        .map_err(|err| err.to_string())?;
    Ok(render(&runtime, outcome).await)
}

#[tauri::command]
pub async fn onboarding_submit_profile(
    runtime: State<'_, Arc<AppRuntime>>,
    form: ProfileForm,
) -> Result<OnboardingViewDto, String> {
    let outcome = runtime
        .onboarding()
        .submit_profile(form)
        .await
        .map_err(|err| err.to_string())?;
    Ok(render(&runtime, outcome).await)
}

#[tauri::command]
pub async fn onboarding_stage_file(
    runtime: State<'_, Arc<AppRuntime>>,
    file: StagedFile,
) -> Result<Vec<StagedFileSummaryDto>, String> {
    let orchestrator = runtime.onboarding();
    orchestrator.stage_file(file).await;
    Ok(summaries(&runtime).await)
}

#[tauri::command]
pub async fn onboarding_remove_file(
    runtime: State<'_, Arc<AppRuntime>>,
    index: usize,
) -> Result<Vec<StagedFileSummaryDto>, String> {
    runtime.onboarding().remove_file(index).await;
    Ok(summaries(&runtime).await)
}

#[tauri::command]
pub async fn onboarding_staged_files(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<StagedFileSummaryDto>, String> {
    Ok(summaries(&runtime).await)
}

#[tauri::command]
pub async fn onboarding_submit_documents(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingViewDto, String> {
    let outcome = runtime
        .onboarding()
        .submit_documents()
        .await
        .map_err(|err| err.to_string())?;
    Ok(render(&runtime, outcome).await)
}

#[tauri::command]
pub async fn onboarding_skip_documents(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingViewDto, String> {
    let outcome = runtime
        .onboarding()
        .skip_documents()
        .await
        .map_err(|err| err.to_string())?;
    Ok(render(&runtime, outcome).await)
}

#[tauri::command]
pub async fn onboarding_complete(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingViewDto, String> {
    let outcome = runtime
        .onboarding()
        .complete()
        .await
        .map_err(|err| err.to_string())?;
    Ok(render(&runtime, outcome).await)
}

/// Purely local back navigation.
#[tauri::command]
pub async fn onboarding_back(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingViewDto, String> {
    let outcome = runtime
        .onboarding()
        .go_back()
        .await
        .map_err(|err| err.to_string())?;
    Ok(render(&runtime, outcome).await)
}

async fn summaries(runtime: &AppRuntime) -> Vec<StagedFileSummaryDto> {
    runtime
        .onboarding()
        .staged()
        .await
        .files()
        .iter()
        .map(StagedFileSummaryDto::from)
        .collect()
}
