//! Build descriptor loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One build's configuration, loaded from a YAML descriptor.
///
/// The descriptor is read once and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Path to the content template.
    pub source: PathBuf,

    /// Path to the style-sheet file.
    pub css: PathBuf,

    /// Document title.
    pub title: String,

    /// Document author.
    pub author: String,

    /// Language tag for the page.
    pub language: String,

    /// Free-form values passed through to the templates.
    #[serde(default)]
    pub data: serde_yaml::Mapping,

    /// Minify the compiled CSS.
    #[serde(default = "default_minify")]
    pub minify: bool,
}

fn default_minify() -> bool {
    true
}

impl BuildConfig {
    /// Load a descriptor from disk.
    ///
    /// Relative `source`/`css` paths resolve against the descriptor's
    /// directory, so a build does not depend on where the tool is invoked
    /// from. Read and parse failures abort the build before anything is
    /// written.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: BuildConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if let Some(dir) = path.parent() {
            config.source = dir.join(&config.source);
            config.css = dir.join(&config.css);
        }

        tracing::debug!("Loaded descriptor from {}", path.display());

        Ok(config)
    }
}

/// Errors that can occur when loading the descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read descriptor {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse descriptor {path}: {message}")]
    Parse { path: String, message: String },
}
