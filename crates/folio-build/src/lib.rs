//! Build pipeline for the `folio` document generator.
//!
//! One build turns a YAML descriptor into a single static HTML page: the
//! content template is compiled with the numbering, math, and banner
//! functions registered, the style sheet is compiled to CSS, and both are
//! merged into the outer page template and written beside the source file.

pub mod builder;
pub mod config;
pub mod math;
pub mod numbering;
pub mod style;
pub mod templates;

pub use builder::{BuildError, BuildResult, PageBuilder};
pub use config::{BuildConfig, ConfigError};
