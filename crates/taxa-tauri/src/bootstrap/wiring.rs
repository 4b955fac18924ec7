//! Dependency injection.
//!
//! The only module that depends on `taxa-infra`, `taxa-api` and `taxa-app`
//! at the same time. Its privilege is assembly only: it creates the concrete
//! adapters and groups them into `AppDeps` without making any decision a use
//! case should make.

use std::sync::Arc;

use taxa_api::HttpBackendClient;
use taxa_app::AppDeps;
use taxa_core::i18n::Translator;
use taxa_infra::{app_data_dir, load_config, FileLanguageStore, FileSessionStore};

/// Errors during dependency injection.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("data directory unavailable: {0}")]
    DataDir(String),

    #[error("configuration loading failed: {0}")]
    Config(String),

    #[error("translation dictionaries failed to load: {0}")]
    Translations(String),
}

/// Name of the optional configuration file inside the app data directory.
pub const CONFIG_FILE: &str = "taxa.toml";

/// Assemble the application dependencies.
pub fn build_deps() -> Result<AppDeps, WiringError> {
    let data_dir = app_data_dir().map_err(|err| WiringError::DataDir(err.to_string()))?;

    let config = load_config(Some(&data_dir.join(CONFIG_FILE)))
        .map_err(|err| WiringError::Config(err.to_string()))?;
    log::info!("talking to backend at {}", config.backend.base_url);

    let backend = Arc::new(HttpBackendClient::from_config(&config));
    let translator = Arc::new(
        Translator::new().map_err(|err| WiringError::Translations(err.to_string()))?,
    );

    Ok(AppDeps {
        session_store: Arc::new(FileSessionStore::with_defaults(data_dir.clone())),
        language_store: Arc::new(FileLanguageStore::with_defaults(data_dir)),
        auth_api: backend.clone(),
        documents_api: backend.clone(),
        chat_api: backend.clone(),
        gdpr_api: backend.clone(),
        registry_api: backend,
        translator,
    })
}
