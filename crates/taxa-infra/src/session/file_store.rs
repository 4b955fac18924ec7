//! File-backed session store.
//!
//! Persists the bearer token and the cached user record as one JSON
//! document, so both fields appear and disappear together. Writes go to a
//! temporary file that is renamed over the target, keeping the stored
//! session either the previous pair or the fully written new one.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use taxa_core::ports::SessionStorePort;
use taxa_core::session::Session;

pub const DEFAULT_SESSION_FILE: &str = "session.json";

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store with base dir and filename.
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            path: base_dir.join(filename.into()),
        }
    }

    /// Create a store with the default filename.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create session dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp session failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp session to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(session).context("serialize session failed")?;
        self.atomic_write(&json).await
    }

    async fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read session failed: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // An unreadable session means "not logged in", never an
                // error; the user simply lands on the login screen.
                log::warn!("stored session is unreadable, treating as absent: {err}");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .with_context(|| format!("remove session failed: {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use taxa_core::session::{AuthToken, UserRecord};
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session::new(
            AuthToken::new("token-1"),
            UserRecord {
                id: 1,
                name: "Jana Nováková".into(),
                email: "jana@example.sk".into(),
                ico: None,
                dic: None,
                ic_dph: None,
                business_name: None,
                business_address: None,
                legal_form: None,
                phone: Some("+421 900 123 456".into()),
                business_type: None,
                expense_type: None,
                vat_status: None,
                onboarding_completed: 1,
                created_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            },
        )
    }

    #[tokio::test]
    async fn save_then_load_round_trips_the_pair() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(dir.path().to_path_buf());

        store.save(&sample_session()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded.token.as_str(), "token-1");
        assert_eq!(loaded.user.onboarding_completed, 1);
    }

    #[tokio::test]
    async fn load_is_absent_when_nothing_was_saved() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(dir.path().to_path_buf());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_after_clear_is_always_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(dir.path().to_path_buf());

        store.save(&sample_session()).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
        // Clearing twice is fine.
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_document_loads_as_absent_not_as_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = FileSessionStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_document_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "").await.unwrap();

        let store = FileSessionStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_the_previous_pair() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(dir.path().to_path_buf());

        store.save(&sample_session()).await.unwrap();
        let mut refreshed = sample_session();
        refreshed.user.onboarding_completed = 2;
        store.save(&refreshed).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.user.onboarding_completed, 2);
    }
}
