//! Math typesetting adapter.

use katex::Opts;

use crate::templates::html_escape;

/// Renders math notation to HTML fragments.
///
/// The renderer is configured with `throw_on_error` disabled, so malformed
/// notation degrades to KaTeX's own error markup instead of aborting the
/// build. An engine-level failure is logged as a warning and degrades to
/// the escaped source text.
pub struct MathRenderer {
    opts: Opts,
}

impl MathRenderer {
    pub fn new() -> Result<Self, MathError> {
        let opts = Opts::builder()
            .throw_on_error(false)
            .build()
            .map_err(|e| MathError::Init(e.to_string()))?;

        Ok(Self { opts })
    }

    /// Typeset one expression.
    pub fn render(&self, src: &str) -> String {
        match katex::render_with_opts(src, &self.opts) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Math rendering failed for {:?}: {}", src, e);
                format!(r#"<span class="math-error">{}</span>"#, html_escape(src))
            }
        }
    }
}

/// Errors that can occur when starting the math renderer.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    #[error("Failed to initialize math renderer: {0}")]
    Init(String),
}
