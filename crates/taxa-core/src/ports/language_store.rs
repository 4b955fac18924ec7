//! Language preference port.

use async_trait::async_trait;

use crate::i18n::Language;

#[async_trait]
pub trait LanguageStorePort: Send + Sync {
    /// Read the persisted language tag; `None` when nothing valid is stored
    /// (callers fall back to the default language).
    async fn load(&self) -> anyhow::Result<Option<Language>>;

    /// Persist the selected language.
    async fn save(&self, language: Language) -> anyhow::Result<()>;
}
