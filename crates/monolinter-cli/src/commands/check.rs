//! Check command implementation.

use anyhow::{Context, Result};
use monolinter_core::{Linter, Registry};
use monolinter_rules::{builtin_registry, filtered_registry};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    config_path: Option<&Path>,
) -> Result<()> {
    let registry = build_registry(rules_filter);

    let mut builder = Linter::builder().root(path);
    if let Some(config_path) = config_path {
        tracing::info!("Using config: {}", config_path.display());
        builder = builder.config_path(config_path);
    }
    let linter = builder
        .build(&registry)
        .context("Failed to build linter")?;

    tracing::info!(
        "Linting {} with {} rules",
        linter.root().display(),
        registry.len()
    );

    let result = linter.lint().context("Lint failed")?;

    super::output::print(&result, format)?;

    // Exit with error code if any result is invalid
    if result.has_invalid() {
        std::process::exit(1);
    }

    Ok(())
}

fn build_registry(rules_filter: Option<&str>) -> Registry {
    let Some(filter) = rules_filter else {
        return builtin_registry();
    };

    let names: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let (registry, unknown) = filtered_registry(&names);
    for name in unknown {
        tracing::warn!("Unknown rule: {}", name);
    }
    registry
}
