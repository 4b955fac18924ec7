//! Application data directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const APP_DIR_NAME: &str = "com.taxa.desktop";

/// Per-user data directory for the TAXA client, created on first use.
///
/// Holds the session document, the language tag, and the optional
/// `taxa.toml` configuration.
pub fn app_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no user data directory available")?;
    let dir = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create app data dir failed: {}", dir.display()))?;
    Ok(dir)
}
