//! Onboarding orchestrator.
//!
//! Drives the pure wizard state machine and executes its actions against the
//! backend: the profile PATCH, the staged document upload, and the two
//! progress PATCHes. The server response is mirrored into the session store
//! after every acknowledged step, which is the only session write in the
//! whole flow, so the cached `onboarding_completed` can never run ahead of
//! what the backend has durably recorded.

use std::sync::Arc;

use tokio::sync::Mutex;

use taxa_core::documents::{StagedBatch, StagedFile};
use taxa_core::onboarding::{
    ProfileForm, WizardAction, WizardError, WizardEvent, WizardState, WizardStateMachine,
};
use taxa_core::ports::{AuthApiPort, DocumentsApiPort, SessionStorePort};
use taxa_core::remote::{ApiError, OnboardingUpdate};
use taxa_core::session::{Route, Session};

use super::context::OnboardingContext;

/// Errors produced by the orchestrator itself. Backend failures are not
/// errors at this level; they land in the wizard state as step-local
/// messages and the caller may simply re-trigger the action.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingFlowError {
    #[error("session store failed: {0}")]
    Store(#[source] anyhow::Error),
}

/// Outcome of entering or driving the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingOutcome {
    /// Render this wizard state.
    Step(WizardState),
    /// Leave the flow and navigate here.
    Redirect(Route),
}

/// Orchestrator that owns the wizard state, the staged file batch, and the
/// ports its side effects run against. Cached in the runtime so the
/// in-memory state survives across command invocations.
pub struct OnboardingOrchestrator {
    context: OnboardingContext,
    staged: Mutex<StagedBatch>,
    session_store: Arc<dyn SessionStorePort>,
    auth_api: Arc<dyn AuthApiPort>,
    documents_api: Arc<dyn DocumentsApiPort>,
}

impl OnboardingOrchestrator {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        auth_api: Arc<dyn AuthApiPort>,
        documents_api: Arc<dyn DocumentsApiPort>,
    ) -> Self {
        Self {
            context: OnboardingContext::starting(),
            staged: Mutex::new(StagedBatch::default()),
            session_store,
            auth_api,
            documents_api,
        }
    }

    /// Create the orchestrator from cloned `Arc<dyn Port>` references.
    pub fn from_ports(
        session_store: Arc<dyn SessionStorePort>,
        auth_api: Arc<dyn AuthApiPort>,
        documents_api: Arc<dyn DocumentsApiPort>,
    ) -> Self {
        Self::new(session_store, auth_api, documents_api)
    }

    /// Enter the wizard.
    ///
    /// No session redirects to login; a fully onboarded user is bounced
    /// straight to the dashboard without any step rendering. Everyone else
    /// starts visually at step 1, whatever the server-recorded progress.
    /// Only forward motion is gated on the backend, not initial placement.
    pub async fn start(&self) -> Result<OnboardingOutcome, OnboardingFlowError> {
        let Some(session) = self
            .session_store
            .load()
            .await
            .map_err(OnboardingFlowError::Store)?
        else {
            return Ok(OnboardingOutcome::Redirect(Route::Login));
        };
        if session.user.is_onboarded() {
            return Ok(OnboardingOutcome::Redirect(Route::Dashboard));
        }

        let _guard = self.context.acquire_dispatch_lock().await;
        let initial = WizardState::Profile { error: None };
        self.context.set(initial.clone()).await;
        Ok(OnboardingOutcome::Step(initial))
    }

    /// Snapshot of the current wizard state.
    pub async fn current(&self) -> WizardState {
        self.context.current().await
    }

    pub async fn submit_profile(
        &self,
        form: ProfileForm,
    ) -> Result<OnboardingOutcome, OnboardingFlowError> {
        self.dispatch(WizardEvent::SubmitProfile { form }).await
    }

    pub async fn submit_documents(&self) -> Result<OnboardingOutcome, OnboardingFlowError> {
        let has_staged_files = !self.staged.lock().await.is_empty();
        self.dispatch(WizardEvent::SubmitDocuments { has_staged_files })
            .await
    }

    pub async fn skip_documents(&self) -> Result<OnboardingOutcome, OnboardingFlowError> {
        self.dispatch(WizardEvent::SkipDocuments).await
    }

    pub async fn complete(&self) -> Result<OnboardingOutcome, OnboardingFlowError> {
        self.dispatch(WizardEvent::Complete).await
    }

    /// Purely local back navigation; no server call, no session mutation.
    pub async fn go_back(&self) -> Result<OnboardingOutcome, OnboardingFlowError> {
        self.dispatch(WizardEvent::Back).await
    }

    pub async fn stage_file(&self, file: StagedFile) {
        self.staged.lock().await.stage(file);
    }

    pub async fn remove_file(&self, index: usize) -> Option<StagedFile> {
        self.staged.lock().await.remove(index)
    }

    pub async fn staged(&self) -> StagedBatch {
        self.staged.lock().await.clone()
    }

    /// Run one event through the machine and execute the resulting actions.
    ///
    /// The dispatch lock serializes the whole cycle, so at most one mutating
    /// request is in flight and a second click waits for the first to
    /// settle.
    async fn dispatch(
        &self,
        event: WizardEvent,
    ) -> Result<OnboardingOutcome, OnboardingFlowError> {
        let _guard = self.context.acquire_dispatch_lock().await;

        // Every forward action replays the bearer token, so the session must
        // still be present.
        let Some(session) = self
            .session_store
            .load()
            .await
            .map_err(OnboardingFlowError::Store)?
        else {
            return Ok(OnboardingOutcome::Redirect(Route::Login));
        };

        let state = self.context.current().await;
        let (mut next, actions) = WizardStateMachine::transition(state, event);

        for action in actions {
            match self.execute_action(&session, &action).await {
                Ok(()) => {
                    let follow_up = match action {
                        // The upload alone acknowledges nothing; the step-2
                        // PATCH that follows it does.
                        WizardAction::UploadStagedFiles => continue,
                        WizardAction::SaveProfile { .. } => WizardEvent::ProfileAccepted,
                        WizardAction::MarkDocumentsDone => WizardEvent::DocumentsAccepted,
                        WizardAction::MarkCompleted => WizardEvent::Completed,
                    };
                    let (after, more) = WizardStateMachine::transition(next, follow_up);
                    debug_assert!(more.is_empty());
                    next = after;
                }
                Err(error) => {
                    let failure = match error {
                        WizardError::UploadFailed => WizardEvent::UploadFailed,
                        other => WizardEvent::RequestFailed { error: other },
                    };
                    let (after, _) = WizardStateMachine::transition(next, failure);
                    next = after;
                    // Abort the remaining actions; staged files and the
                    // session stay untouched for a retry.
                    break;
                }
            }
        }

        self.context.set(next.clone()).await;
        Ok(match next {
            WizardState::Done => OnboardingOutcome::Redirect(Route::Dashboard),
            step => OnboardingOutcome::Step(step),
        })
    }

    async fn execute_action(
        &self,
        session: &Session,
        action: &WizardAction,
    ) -> Result<(), WizardError> {
        match action {
            WizardAction::SaveProfile { update } => self.patch(session, update).await,
            WizardAction::MarkDocumentsDone => {
                self.patch(session, &OnboardingUpdate::progress(2)).await
            }
            WizardAction::MarkCompleted => {
                self.patch(session, &OnboardingUpdate::progress(3)).await
            }
            WizardAction::UploadStagedFiles => {
                let files = self.staged.lock().await.files().to_vec();
                match self.documents_api.upload(&session.token, &files).await {
                    Ok(()) => {
                        self.staged.lock().await.clear();
                        Ok(())
                    }
                    Err(err) => {
                        log::warn!("staged document upload failed: {err}");
                        Err(WizardError::UploadFailed)
                    }
                }
            }
        }
    }

    async fn patch(
        &self,
        session: &Session,
        update: &OnboardingUpdate,
    ) -> Result<(), WizardError> {
        match self.auth_api.update_onboarding(&session.token, update).await {
            Ok(user) => {
                // Mirror the authoritative record. A failed mirror leaves
                // the cached counter behind the server's, never ahead.
                let refreshed = Session::new(session.token.clone(), user);
                if let Err(err) = self.session_store.save(&refreshed).await {
                    log::warn!("failed to mirror onboarding update into session store: {err}");
                }
                Ok(())
            }
            Err(err) => Err(wizard_error_from(err)),
        }
    }
}

fn wizard_error_from(err: ApiError) -> WizardError {
    match err.server_message() {
        Some(message) => WizardError::Rejected {
            message: message.to_string(),
        },
        None => WizardError::Connection,
    }
}
