//! Application dependencies.
//!
//! This is NOT a builder: no build steps, no default values, no hidden
//! logic. Just parameter grouping for runtime construction; the struct
//! itself is the dependency manifest, and every field is required.

use std::sync::Arc;

use taxa_core::i18n::Translator;
use taxa_core::ports::{
    AuthApiPort, ChatApiPort, DocumentsApiPort, GdprApiPort, LanguageStorePort, RegistryApiPort,
    SessionStorePort,
};

/// Application dependency grouping.
pub struct AppDeps {
    // Client-side persistence
    pub session_store: Arc<dyn SessionStorePort>,
    pub language_store: Arc<dyn LanguageStorePort>,

    // Backend surfaces
    pub auth_api: Arc<dyn AuthApiPort>,
    pub documents_api: Arc<dyn DocumentsApiPort>,
    pub chat_api: Arc<dyn ChatApiPort>,
    pub gdpr_api: Arc<dyn GdprApiPort>,
    pub registry_api: Arc<dyn RegistryApiPort>,

    // Localization
    pub translator: Arc<Translator>,
}
