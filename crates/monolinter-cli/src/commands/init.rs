//! Init command implementation.

use anyhow::{bail, Context, Result};
use monolinter_core::CONFIG_FILE_NAME;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"{
  "module-markers": ["**/package.json", "**/serverless.yml"],
  "use-gitignore": true,
  "rules": {
    "serverless-same-name": true,
    "packagejson-same-name": true,
    "module-name-regex": { "enabled": true, "pattern": "^[a-z0-9][a-z0-9._-]*$" },
    "module-required-files": { "enabled": false, "files": ["README.md"] },
    "root-required-files": { "enabled": false, "files": ["README.md"] }
  }
}
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure rules");
    println!("  2. Add {CONFIG_FILE_NAME} to sub-directories to override settings there");
    println!("  3. Run: monolinter check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
