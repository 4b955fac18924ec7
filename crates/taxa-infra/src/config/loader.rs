//! Layered configuration: built-in defaults, an optional `taxa.toml` in the
//! app data directory, and `TAXA_*` environment variables on top.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use taxa_core::config::{AppConfig, DEFAULT_BACKEND_URL};

/// Load the application configuration.
///
/// `config_file` is read when present and silently skipped when missing.
/// Environment variables use a double underscore for nesting, e.g.
/// `TAXA_BACKEND__BASE_URL`.
pub fn load_config(config_file: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder()
        .set_default("backend.base_url", DEFAULT_BACKEND_URL)
        .context("set config defaults failed")?;

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path.to_path_buf()).required(false));
    }

    let settings = builder
        .add_source(Environment::with_prefix("TAXA").separator("__"))
        .build()
        .context("assemble configuration failed")?;

    settings
        .try_deserialize::<AppConfig>()
        .context("deserialize configuration failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_any_sources() {
        let config = load_config(None).unwrap();
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn missing_config_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("taxa.toml"))).unwrap();
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn config_file_overrides_the_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taxa.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[backend]\nbase_url = \"https://api.taxa.sk\"").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.backend.base_url, "https://api.taxa.sk");
    }
}
