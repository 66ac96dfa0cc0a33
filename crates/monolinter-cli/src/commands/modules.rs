//! Modules command implementation.

use anyhow::{Context, Result};
use monolinter_core::Linter;
use monolinter_rules::builtin_registry;
use std::path::Path;

/// Runs the modules command.
pub fn run(path: &Path, config_path: Option<&Path>) -> Result<()> {
    let registry = builtin_registry();

    let mut builder = Linter::builder().root(path);
    if let Some(config_path) = config_path {
        builder = builder.config_path(config_path);
    }
    let linter = builder
        .build(&registry)
        .context("Failed to build linter")?;

    let modules = linter.modules().context("Module discovery failed")?;

    println!("{:<25} {:<40} Enabled rules", "Module", "Path");
    println!("{}", "-".repeat(100));

    for module in &modules {
        let rules: Vec<&str> = module.enabled_rules.iter().map(String::as_str).collect();
        println!(
            "{:<25} {:<40} {}",
            module.name,
            module.relative_path.display(),
            rules.join(", ")
        );
    }

    println!("\n{} module(s)", modules.len());

    Ok(())
}
