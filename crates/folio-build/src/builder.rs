//! The build driver.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::BuildConfig;
use crate::math::{MathError, MathRenderer};
use crate::style::{self, StyleError};
use crate::templates::{self, PAGE_TEMPLATE_FILE};

/// Result of one page build.
#[derive(Debug)]
pub struct BuildResult {
    /// Path of the written page.
    pub output_path: PathBuf,

    /// Total build time in milliseconds.
    pub duration_ms: u64,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read content template {path}: {message}")]
    ReadSource { path: String, message: String },

    #[error("Failed to read page template {path}: {message}")]
    ReadPage { path: String, message: String },

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("Failed to compile template: {0}")]
    Template(String),

    #[error("Failed to render page: {0}")]
    Render(String),

    #[error("Failed to write output {path}: {message}")]
    Write { path: String, message: String },
}

/// Drives one descriptor through the whole pipeline.
pub struct PageBuilder {
    config: BuildConfig,
}

impl PageBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the build.
    ///
    /// Exactly one HTML file is written on success, beside the content
    /// source with its extension replaced by `.html`; nothing is written
    /// on failure.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        tracing::info!("Building {}", self.config.source.display());

        let content_src =
            fs::read_to_string(&self.config.source).map_err(|e| BuildError::ReadSource {
                path: self.config.source.display().to_string(),
                message: e.to_string(),
            })?;

        // The outer page template has a fixed name and always resolves in
        // the working directory.
        let page_src = fs::read_to_string(PAGE_TEMPLATE_FILE).map_err(|e| BuildError::ReadPage {
            path: PAGE_TEMPLATE_FILE.to_string(),
            message: e.to_string(),
        })?;

        let css = style::compile(&self.config.css, self.config.minify)?;
        tracing::debug!(
            "Compiled stylesheet {} ({} bytes)",
            self.config.css.display(),
            css.len()
        );

        let math = MathRenderer::new()?;

        let env = templates::environment(&self.config, math, content_src, page_src, css)
            .map_err(|e| BuildError::Template(e.to_string()))?;
        let html = templates::render_page(&env, &self.config)
            .map_err(|e| BuildError::Render(e.to_string()))?;

        let output_path = output_path(&self.config.source);
        fs::write(&output_path, &html).map_err(|e| BuildError::Write {
            path: output_path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!("Wrote {}", output_path.display());

        Ok(BuildResult {
            output_path,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Output lands beside the source with the extension replaced.
fn output_path(source: &Path) -> PathBuf {
    source.with_extension("html")
}
