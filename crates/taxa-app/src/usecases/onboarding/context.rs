use std::sync::Arc;

use tokio::sync::Mutex;

use taxa_core::onboarding::WizardState;

/// Shared wizard context: the current state plus a dispatch lock.
///
/// ## Lock ordering
/// Acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock` serializes the whole transition + side-effect +
///   state-update cycle, so at most one mutating request is in flight.
/// - `state` is used for both reading (`current`) and writing; `current`
///   does NOT take the dispatch lock.
#[derive(Clone)]
pub struct OnboardingContext {
    state: Arc<Mutex<WizardState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl OnboardingContext {
    pub fn new(initial: WizardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Context positioned on step 1, where the wizard always starts
    /// visually.
    pub fn starting() -> Self {
        Self::new(WizardState::Profile { error: None })
    }

    /// Snapshot of the current state. Does not serialize against dispatch.
    pub async fn current(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Acquire the dispatch lock; the guard must outlive the whole cycle.
    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Replace the state. Only call while holding the dispatch lock.
    pub(crate) async fn set(&self, next: WizardState) {
        *self.state.lock().await = next;
    }
}
