use std::sync::Arc;

use taxa_core::i18n::Language;
use taxa_core::ports::LanguageStorePort;

/// Use case for reading the active language.
///
/// The read path degrades to the default language: nothing stored, an
/// unsupported stored tag, or a store failure all resolve to Slovak.
pub struct GetLanguage {
    language_store: Arc<dyn LanguageStorePort>,
}

impl GetLanguage {
    pub fn new(language_store: Arc<dyn LanguageStorePort>) -> Self {
        Self { language_store }
    }

    /// Create the use case from a cloned `Arc<dyn Port>` reference.
    pub fn from_ports(language_store: Arc<dyn LanguageStorePort>) -> Self {
        Self::new(language_store)
    }

    pub async fn execute(&self) -> Language {
        match self.language_store.load().await {
            Ok(Some(language)) => language,
            Ok(None) => Language::default(),
            Err(err) => {
                log::warn!("language store read failed: {err}");
                Language::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::MockLanguageStore;

    #[tokio::test]
    async fn missing_preference_falls_back_to_slovak() {
        let uc = GetLanguage::from_ports(Arc::new(MockLanguageStore::empty()));
        assert_eq!(uc.execute().await, Language::Sk);
    }

    #[tokio::test]
    async fn stored_preference_wins() {
        let uc = GetLanguage::from_ports(Arc::new(MockLanguageStore::with_language(Language::Hu)));
        assert_eq!(uc.execute().await, Language::Hu);
    }
}
