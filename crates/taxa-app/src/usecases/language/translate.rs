use std::sync::Arc;

use taxa_core::i18n::Translator;
use taxa_core::ports::LanguageStorePort;

use super::get::GetLanguage;

/// Use case resolving one dotted key in the active language.
///
/// Preserves the resolver's fall-back-to-key behavior; the webview shows
/// whatever comes back.
pub struct TranslateKey {
    language: GetLanguage,
    translator: Arc<Translator>,
}

impl TranslateKey {
    pub fn new(language_store: Arc<dyn LanguageStorePort>, translator: Arc<Translator>) -> Self {
        Self {
            language: GetLanguage::new(language_store),
            translator,
        }
    }

    /// Create the use case from cloned `Arc` references.
    pub fn from_ports(
        language_store: Arc<dyn LanguageStorePort>,
        translator: Arc<Translator>,
    ) -> Self {
        Self::new(language_store, translator)
    }

    pub async fn execute(&self, key: &str) -> String {
        let language = self.language.execute().await;
        self.translator.translate(language, key)
    }
}
