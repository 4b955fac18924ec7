//! Application configuration domain model.

use serde::{Deserialize, Serialize};

/// Backend the client talks to when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
}

/// Backend connectivity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the TAXA backend API.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: DEFAULT_BACKEND_URL.to_string(),
            },
        }
    }
}
