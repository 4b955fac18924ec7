//! File-backed language preference.
//!
//! Stores the bare language tag. A stored tag outside the supported set
//! reads back as `None`, so callers fall back to the default language
//! instead of failing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use taxa_core::i18n::Language;
use taxa_core::ports::LanguageStorePort;

pub const DEFAULT_LANGUAGE_FILE: &str = "language";

pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store with the default filename.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_LANGUAGE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create language dir failed: {}", dir.display()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl LanguageStorePort for FileLanguageStore {
    async fn load(&self) -> Result<Option<Language>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read language failed: {}", self.path.display()))?;
        Ok(Language::from_tag(content.trim()))
    }

    async fn save(&self, language: Language) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, language.as_tag())
            .await
            .with_context(|| format!("write temp language failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp language to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}
