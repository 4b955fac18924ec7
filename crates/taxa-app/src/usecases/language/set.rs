use std::sync::Arc;

use taxa_core::i18n::Language;
use taxa_core::ports::LanguageStorePort;

/// Use case for switching the active language. Takes effect for all
/// subsequently rendered text.
pub struct SetLanguage {
    language_store: Arc<dyn LanguageStorePort>,
}

impl SetLanguage {
    pub fn new(language_store: Arc<dyn LanguageStorePort>) -> Self {
        Self { language_store }
    }

    /// Create the use case from a cloned `Arc<dyn Port>` reference.
    pub fn from_ports(language_store: Arc<dyn LanguageStorePort>) -> Self {
        Self::new(language_store)
    }

    pub async fn execute(&self, language: Language) -> anyhow::Result<()> {
        self.language_store.save(language).await
    }
}
