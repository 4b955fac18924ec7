//! Use cases.
//!
//! Each use case is a small struct wired from `Arc<dyn Port>` references
//! with a single `execute` entry point. The onboarding orchestrator is the
//! one stateful exception: it owns the wizard state machine and is shared
//! across command invocations.

#[cfg(test)]
pub(crate) mod testing;

pub mod auth;
pub mod chat;
pub mod documents;
pub mod gdpr;
pub mod language;
pub mod onboarding;
pub mod registry;
pub mod session;

pub use auth::{AuthError, Login, LoginOutcome, Logout, Register, RegisterError, RegisterForm};
pub use chat::ChatPanel;
pub use documents::{DocumentsError, ListDocuments, UploadDocuments};
pub use gdpr::{AccountDeletion, DataExport, DeleteAccount, ExportMyData, FetchPrivacyInfo, GdprError};
pub use language::{GetLanguage, SetLanguage, TranslateKey};
pub use onboarding::{OnboardingFlowError, OnboardingOrchestrator, OnboardingOutcome};
pub use registry::LookupIco;
pub use session::{Gate, SessionGate};
