//! DTOs for the webview API.
//!
//! These separate the frontend surface from the internal domain models, so
//! the domain can evolve without breaking the screens.

use serde::Serialize;

use taxa_app::usecases::{Gate, LoginOutcome, OnboardingOutcome};
use taxa_core::documents::StagedFile;
use taxa_core::i18n::{Language, Translator};
use taxa_core::onboarding::WizardError;
use taxa_core::session::UserRecord;

/// Successful sign-in/registration result.
#[derive(Debug, Clone, Serialize)]
pub struct LoginDto {
    pub user: UserRecord,
    /// Path the webview should navigate to.
    pub redirect: String,
}

impl From<LoginOutcome> for LoginDto {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: outcome.user,
            redirect: outcome.destination.path().to_string(),
        }
    }
}

/// Gate decision for a protected screen.
#[derive(Debug, Clone, Serialize)]
pub struct GateDto {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
}

impl From<Gate> for GateDto {
    fn from(gate: Gate) -> Self {
        match gate {
            Gate::Proceed(session) => Self {
                allowed: true,
                redirect: None,
                user: Some(session.user),
            },
            Gate::Redirect(route) => Self {
                allowed: false,
                redirect: Some(route.path().to_string()),
                user: None,
            },
        }
    }
}

/// Wizard view: the step to render, the error banner text if any, or a
/// redirect when the flow is left.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingViewDto {
    pub step: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl OnboardingViewDto {
    /// Render an outcome, resolving the typed wizard error into display
    /// text: the server's message verbatim, or the localized string for the
    /// error kind.
    pub fn render(
        outcome: OnboardingOutcome,
        translator: &Translator,
        language: Language,
    ) -> Self {
        match outcome {
            OnboardingOutcome::Redirect(route) => Self {
                step: 0,
                error: None,
                redirect: Some(route.path().to_string()),
            },
            OnboardingOutcome::Step(state) => Self {
                step: state.step_number(),
                error: state
                    .error()
                    .map(|error| display_wizard_error(translator, language, error)),
                redirect: None,
            },
        }
    }
}

fn display_wizard_error(
    translator: &Translator,
    language: Language,
    error: &WizardError,
) -> String {
    match error {
        WizardError::MissingBusinessChoice => {
            translator.translate(language, "onboarding.error_required_fields")
        }
        WizardError::Rejected { message } if !message.is_empty() => message.clone(),
        WizardError::Rejected { .. } => translator.translate(language, "onboarding.error_update"),
        WizardError::UploadFailed => translator.translate(language, "onboarding.error_upload"),
        WizardError::Connection => {
            translator.translate(language, "onboarding.error_connection")
        }
    }
}

/// Staged file listing entry; the bytes stay on the Rust side.
#[derive(Debug, Clone, Serialize)]
pub struct StagedFileSummaryDto {
    pub file_name: String,
    pub size: usize,
}

impl From<&StagedFile> for StagedFileSummaryDto {
    fn from(file: &StagedFile) -> Self {
        Self {
            file_name: file.file_name.clone(),
            size: file.bytes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxa_core::onboarding::WizardState;
    use taxa_core::session::Route;

    #[test]
    fn redirect_outcomes_carry_the_route_path() {
        let translator = Translator::new().unwrap();
        let dto = OnboardingViewDto::render(
            OnboardingOutcome::Redirect(Route::Dashboard),
            &translator,
            Language::Sk,
        );
        assert_eq!(dto.redirect.as_deref(), Some("/dashboard"));
    }

    #[test]
    fn rejected_errors_show_the_server_message_verbatim() {
        let translator = Translator::new().unwrap();
        let state = WizardState::Profile {
            error: Some(WizardError::Rejected {
                message: "invalid phone".into(),
            }),
        };
        let dto = OnboardingViewDto::render(
            OnboardingOutcome::Step(state),
            &translator,
            Language::En,
        );
        assert_eq!(dto.step, 1);
        assert_eq!(dto.error.as_deref(), Some("invalid phone"));
    }

    #[test]
    fn connection_errors_are_localized() {
        let translator = Translator::new().unwrap();
        let state = WizardState::Documents {
            error: Some(WizardError::Connection),
        };
        let dto = OnboardingViewDto::render(
            OnboardingOutcome::Step(state),
            &translator,
            Language::Sk,
        );
        assert_eq!(
            dto.error.as_deref(),
            Some("Nepodarilo sa spojiť so serverom. Skúste to znova.")
        );
    }
}
