//! Style-sheet compilation.

use std::fs;
use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// Compile a style-sheet file to CSS text.
///
/// Any failure here is fatal to the build.
pub fn compile(path: &Path, minify: bool) -> Result<String, StyleError> {
    let source = fs::read_to_string(path).map_err(|e| StyleError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let stylesheet =
        StyleSheet::parse(&source, ParserOptions::default()).map_err(|e| StyleError::Compile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify,
            ..Default::default()
        })
        .map_err(|e| StyleError::Compile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(css.code)
}

/// Errors that can occur when compiling the style sheet.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Failed to read stylesheet {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to compile stylesheet {path}: {message}")]
    Compile { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_stylesheet(dir: &tempfile::TempDir, css: &str) -> std::path::PathBuf {
        let path = dir.path().join("style.css");
        fs::write(&path, css).unwrap();
        path
    }

    #[test]
    fn compiles_and_minifies() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_stylesheet(
            &dir,
            r#"
.button {
    background-color: blue;
    padding: 10px;
}
"#,
        );

        let css = compile(&path, true).unwrap();

        assert!(!css.contains('\n'));
        assert!(css.contains(".button"));
    }

    #[test]
    fn keeps_formatting_without_minification() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_stylesheet(&dir, ".button { padding: 10px; }");

        let css = compile(&path, false).unwrap();

        assert!(css.contains(".button"));
        assert!(css.contains("padding"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = compile(&dir.path().join("absent.css"), true).unwrap_err();

        assert!(matches!(err, StyleError::Read { .. }));
    }

    #[test]
    fn unknown_at_rule_is_a_compile_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_stylesheet(&dir, "@tailwind base;");

        let err = compile(&path, true).unwrap_err();

        assert!(matches!(err, StyleError::Compile { .. }));
    }
}
