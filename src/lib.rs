//! # SvgCut
//!
//! Optimizes CAD-exported SVG drawings for laser cutting:
//! - Removes duplicate edges shared by adjacent faces
//! - Rejoins fragmented segments into continuous paths
//! - Orders paths to shorten the travel between cuts
//!
//! ## Architecture
//!
//! SvgCut is organized as a workspace with multiple crates:
//!
//! 1. **svgcut-core** - Numeric normalization, positions, error types
//! 2. **svgcut-camtools** - Path parsing, deduplication, chaining, tour ordering
//! 3. **svgcut-designer** - SVG document import and export
//! 4. **svgcut-settings** - Configuration files and validation
//! 5. **svgcut** - Command line binary that integrates all crates

use anyhow::{bail, Context};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub use svgcut_camtools::{CutOptimizer, CutPlan, OptimizationStats};
pub use svgcut_core::{DocumentError, Error, ParseError, Position, Result};
pub use svgcut_designer::{derive_output_path, PathStyle, SvgDocument, SvgElement};
pub use svgcut_settings::{Config, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - Pretty or JSON formatting
/// - RUST_LOG environment variable support, falling back to the configured level
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.level.to_ascii_lowercase()))
        .context("Invalid log filter")?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    Ok(())
}

/// Outcome of optimizing one file
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: OptimizationStats,
}

/// Optimize the drawing group of a document.
///
/// Returns the rewritten document; the input document is untouched.
pub fn optimize_document(
    document: &SvgDocument,
    config: &Config,
) -> Result<(SvgDocument, OptimizationStats)> {
    let span = document.locate_group(config.document.group_id.as_deref())?;
    let children = document.children(span)?;

    let style = if config.document.inherit_path_style {
        PathStyle::inherit_from(&children)
    } else {
        PathStyle::default()
    };

    let inputs = children
        .into_iter()
        .map(SvgElement::into_cut_input)
        .collect::<std::result::Result<Vec<_>, DocumentError>>()?;

    let plan = CutOptimizer::optimize(inputs)?;
    let rendered = svgcut_designer::render_shapes(&plan.shapes, &style);

    Ok((document.with_group_children(span, &rendered), plan.stats))
}

/// Resolve a path that may not exist yet through its parent directory.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(path.file_name()?))
}

/// Whether two paths name the same file, after resolving `.`, `..` and links
fn same_file(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Optimize `input` and write the result.
///
/// The output goes to `output` when given, otherwise next to the input with
/// the configured suffix. Nothing is written unless the whole drawing was
/// processed successfully.
pub fn run(input: &Path, output: Option<&Path>, config: &Config) -> anyhow::Result<RunSummary> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input, &config.output.suffix),
    };

    if same_file(input, &output) {
        bail!("Output path {} would overwrite the input", output.display());
    }
    if output.exists() && !config.output.overwrite {
        bail!(
            "Output file {} already exists and overwriting is disabled",
            output.display()
        );
    }

    let document = SvgDocument::load_from_file(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let (optimized, stats) = optimize_document(&document, config)
        .with_context(|| format!("Failed to optimize {}", input.display()))?;

    optimized
        .write_to_file(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        chains = stats.chains_built,
        duplicates = stats.duplicates_removed,
        "Wrote optimized drawing"
    );

    Ok(RunSummary {
        input: input.to_path_buf(),
        output,
        stats,
    })
}
