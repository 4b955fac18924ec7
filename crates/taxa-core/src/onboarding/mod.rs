//! Onboarding wizard domain.
//!
//! The wizard is the only multi-step, server-synchronized flow in the
//! client: three ordered steps, each gated on a backend acknowledgment.

pub mod form;
pub mod state_machine;

pub use form::ProfileForm;
pub use state_machine::{WizardAction, WizardError, WizardEvent, WizardState, WizardStateMachine};
