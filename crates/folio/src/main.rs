//! Folio CLI - single-page document builder.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use folio_build::{BuildConfig, PageBuilder};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build a static HTML page from a content template and a style sheet")]
#[command(version)]
struct Cli {
    /// Path to the YAML build descriptor
    descriptor: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = BuildConfig::load(&cli.descriptor)?;
    let result = PageBuilder::new(config).build()?;

    tracing::info!(
        "Built {} in {}ms",
        result.output_path.display(),
        result.duration_ms
    );

    Ok(())
}
