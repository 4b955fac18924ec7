//! Onboarding wizard state machine.
//!
//! Defines a pure state transition function for the three-step onboarding
//! flow. Side effects (PATCH requests, the staged document upload) are
//! described as actions and executed by the orchestrator in the application
//! layer. The machine never advances past a step without the matching
//! acknowledgment event, so the visible step can never outrun what the
//! backend has durably recorded.

use serde::{Deserialize, Serialize};

use super::form::ProfileForm;
use crate::remote::OnboardingUpdate;

/// Wizard state. Each non-terminal step carries the error currently shown
/// next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardState {
    /// Step 1: business profile.
    Profile { error: Option<WizardError> },
    /// Step 2: document staging and upload.
    Documents { error: Option<WizardError> },
    /// Step 3: review.
    Review { error: Option<WizardError> },
    /// The flow has been left for the dashboard.
    Done,
}

impl WizardState {
    /// 1-based step number shown in the progress bar.
    pub fn step_number(&self) -> u8 {
        match self {
            WizardState::Profile { .. } => 1,
            WizardState::Documents { .. } => 2,
            WizardState::Review { .. } | WizardState::Done => 3,
        }
    }

    pub fn error(&self) -> Option<&WizardError> {
        match self {
            WizardState::Profile { error }
            | WizardState::Documents { error }
            | WizardState::Review { error } => error.as_ref(),
            WizardState::Done => None,
        }
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// User submits the step-1 form.
    SubmitProfile { form: ProfileForm },
    /// Backend acknowledged the step-1 update.
    ProfileAccepted,
    /// User submits step 2; `has_staged_files` selects the upload branch.
    SubmitDocuments { has_staged_files: bool },
    /// User skips document upload entirely.
    SkipDocuments,
    /// Backend acknowledged the step-2 update.
    DocumentsAccepted,
    /// User confirms the review step.
    Complete,
    /// Backend acknowledged the final update.
    Completed,
    /// Navigate back one step. Purely local, touches nothing server-side.
    Back,
    /// The staged batch upload failed; the transition is aborted.
    UploadFailed,
    /// A PATCH was rejected or the transport failed.
    RequestFailed { error: WizardError },
}

/// Side effects produced by transitions, executed by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardAction {
    /// PATCH the profile fields together with `onboarding_completed: 1`.
    SaveProfile { update: OnboardingUpdate },
    /// Upload the staged batch as one multipart request.
    UploadStagedFiles,
    /// PATCH `{ onboarding_completed: 2 }`.
    MarkDocumentsDone,
    /// PATCH `{ onboarding_completed: 3 }`.
    MarkCompleted,
}

/// Wizard error types surfaced next to the active step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardError {
    /// Step 1 submitted without the mandatory regime choice.
    MissingBusinessChoice,
    /// The backend rejected an update; carries the server's message.
    Rejected { message: String },
    /// The staged document upload failed.
    UploadFailed,
    /// Transport-level failure talking to the backend.
    Connection,
}

/// Pure wizard state machine: no side effects, no I/O.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Profile { .. }, WizardEvent::SubmitProfile { form }) => {
                if !form.is_complete() {
                    return (
                        WizardState::Profile {
                            error: Some(WizardError::MissingBusinessChoice),
                        },
                        Vec::new(),
                    );
                }
                let update = OnboardingUpdate {
                    phone: form.phone.clone(),
                    business_type: form.business_type,
                    expense_type: form.expense_type,
                    vat_status: Some(form.vat_status),
                    onboarding_completed: Some(1),
                };
                (
                    WizardState::Profile { error: None },
                    vec![WizardAction::SaveProfile { update }],
                )
            }
            (WizardState::Profile { .. }, WizardEvent::ProfileAccepted) => {
                (WizardState::Documents { error: None }, Vec::new())
            }
            (WizardState::Documents { .. }, WizardEvent::SubmitDocuments { has_staged_files }) => {
                let mut actions = Vec::new();
                if has_staged_files {
                    actions.push(WizardAction::UploadStagedFiles);
                }
                actions.push(WizardAction::MarkDocumentsDone);
                (WizardState::Documents { error: None }, actions)
            }
            (WizardState::Documents { .. }, WizardEvent::SkipDocuments) => (
                WizardState::Documents { error: None },
                vec![WizardAction::MarkDocumentsDone],
            ),
            (WizardState::Documents { .. }, WizardEvent::DocumentsAccepted) => {
                (WizardState::Review { error: None }, Vec::new())
            }
            (WizardState::Documents { .. }, WizardEvent::UploadFailed) => (
                WizardState::Documents {
                    error: Some(WizardError::UploadFailed),
                },
                Vec::new(),
            ),
            (WizardState::Documents { .. }, WizardEvent::Back) => {
                (WizardState::Profile { error: None }, Vec::new())
            }
            (WizardState::Review { .. }, WizardEvent::Complete) => (
                WizardState::Review { error: None },
                vec![WizardAction::MarkCompleted],
            ),
            (WizardState::Review { .. }, WizardEvent::Completed) => {
                (WizardState::Done, Vec::new())
            }
            (WizardState::Review { .. }, WizardEvent::Back) => {
                (WizardState::Documents { error: None }, Vec::new())
            }
            (WizardState::Profile { .. }, WizardEvent::RequestFailed { error }) => (
                WizardState::Profile { error: Some(error) },
                Vec::new(),
            ),
            (WizardState::Documents { .. }, WizardEvent::RequestFailed { error }) => (
                WizardState::Documents { error: Some(error) },
                Vec::new(),
            ),
            (WizardState::Review { .. }, WizardEvent::RequestFailed { error }) => (
                WizardState::Review { error: Some(error) },
                Vec::new(),
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
