//! Application runtime.
//!
//! The `AppRuntime` holds the assembled dependencies and is managed by
//! Tauri's state system; commands reach use cases through the `usecases()`
//! accessor. The onboarding orchestrator and the chat panel are cached here
//! so their in-memory state (wizard step, staged files, conversation)
//! survives across command invocations instead of resetting on every call.

use std::sync::Arc;

use taxa_app::usecases::{
    ChatPanel, DeleteAccount, ExportMyData, FetchPrivacyInfo, GetLanguage, ListDocuments, Login,
    Logout, LookupIco, OnboardingOrchestrator, Register, SessionGate, SetLanguage, TranslateKey,
    UploadDocuments,
};
use taxa_app::AppDeps;

pub struct AppRuntime {
    /// Application dependencies.
    pub deps: AppDeps,
    /// Cached wizard orchestrator, shared across all commands.
    onboarding: Arc<OnboardingOrchestrator>,
    /// Cached chat panel, shared across all commands.
    chat: Arc<ChatPanel>,
}

impl AppRuntime {
    /// Create a new runtime from dependencies.
    pub fn new(deps: AppDeps) -> Self {
        let onboarding = Arc::new(OnboardingOrchestrator::from_ports(
            deps.session_store.clone(),
            deps.auth_api.clone(),
            deps.documents_api.clone(),
        ));
        let chat = Arc::new(ChatPanel::from_ports(
            deps.chat_api.clone(),
            deps.session_store.clone(),
            deps.language_store.clone(),
            deps.translator.clone(),
        ));
        Self {
            deps,
            onboarding,
            chat,
        }
    }

    /// Get the use cases accessor.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    /// The shared onboarding orchestrator.
    pub fn onboarding(&self) -> Arc<OnboardingOrchestrator> {
        self.onboarding.clone()
    }

    /// The shared chat panel.
    pub fn chat(&self) -> Arc<ChatPanel> {
        self.chat.clone()
    }
}

/// Use case factory with dependencies pre-wired from the runtime.
///
/// Commands don't need to know which ports a use case takes; all
/// port-to-use-case wiring is centralized here and the use cases themselves
/// stay independent of `AppDeps`.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn login(&self) -> Login {
        Login::from_ports(
            self.runtime.deps.auth_api.clone(),
            self.runtime.deps.session_store.clone(),
        )
    }

    pub fn register(&self) -> Register {
        Register::from_ports(
            self.runtime.deps.auth_api.clone(),
            self.runtime.deps.session_store.clone(),
        )
    }

    pub fn logout(&self) -> Logout {
        Logout::from_ports(self.runtime.deps.session_store.clone())
    }

    pub fn session_gate(&self) -> SessionGate {
        SessionGate::from_ports(self.runtime.deps.session_store.clone())
    }

    pub fn upload_documents(&self) -> UploadDocuments {
        UploadDocuments::from_ports(
            self.runtime.deps.documents_api.clone(),
            self.runtime.deps.session_store.clone(),
        )
    }

    pub fn list_documents(&self) -> ListDocuments {
        ListDocuments::from_ports(
            self.runtime.deps.documents_api.clone(),
            self.runtime.deps.session_store.clone(),
        )
    }

    pub fn export_my_data(&self) -> ExportMyData {
        ExportMyData::from_ports(
            self.runtime.deps.gdpr_api.clone(),
            self.runtime.deps.session_store.clone(),
        )
    }

    pub fn delete_account(&self) -> DeleteAccount {
        DeleteAccount::from_ports(
            self.runtime.deps.gdpr_api.clone(),
            self.runtime.deps.session_store.clone(),
        )
    }

    pub fn privacy_info(&self) -> FetchPrivacyInfo {
        FetchPrivacyInfo::from_ports(self.runtime.deps.gdpr_api.clone())
    }

    pub fn get_language(&self) -> GetLanguage {
        GetLanguage::from_ports(self.runtime.deps.language_store.clone())
    }

    pub fn set_language(&self) -> SetLanguage {
        SetLanguage::from_ports(self.runtime.deps.language_store.clone())
    }

    pub fn translate_key(&self) -> TranslateKey {
        TranslateKey::from_ports(
            self.runtime.deps.language_store.clone(),
            self.runtime.deps.translator.clone(),
        )
    }

    pub fn lookup_ico(&self) -> LookupIco {
        LookupIco::from_ports(self.runtime.deps.registry_api.clone())
    }
}
