//! Module discovery.
//!
//! Expands the configured marker patterns under the repository root, turns
//! every match into a candidate module, and resolves each candidate's
//! effective configuration.

use crate::config::Config;
use crate::linter::LintError;
use crate::module::Module;
use crate::registry::Registry;
use crate::resolver::{self, Resolution};

use glob::MatchOptions;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Hidden entries are matched by `*` and `**`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Discovers every module under `root`.
///
/// Modules come back in discovery order: marker patterns in configured
/// order, and matches of one pattern in the sorted order `glob` yields.
/// When several markers land in the same directory the first one wins.
/// Modules whose path carries an ignore marker are dropped silently, and
/// matches that leave the root (through `..` in a pattern) are skipped.
///
/// # Errors
///
/// Returns an error on an invalid marker pattern, an unreadable directory,
/// or a config document that fails to load.
pub fn discover(root: &Path, base: &Config, registry: &Registry) -> Result<Vec<Module>, LintError> {
    let gitignore = if base.use_gitignore() {
        load_gitignore(root)
    } else {
        None
    };

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut modules = Vec::new();

    for marker in find_markers(root, base)? {
        let Some(relative) = marker
            .strip_prefix(root)
            .ok()
            .filter(|relative| resolver::is_contained(relative))
        else {
            warn!("Skipping marker outside the root: {}", marker.display());
            continue;
        };
        if let Some(gitignore) = &gitignore {
            if gitignore
                .matched_path_or_any_parents(relative, false)
                .is_ignore()
            {
                debug!("Skipping gitignored marker: {}", relative.display());
                continue;
            }
        }

        let Some(dir) = marker.parent().map(Path::to_path_buf) else {
            continue;
        };
        if !seen.insert(dir.clone()) {
            debug!("Module already discovered: {}", dir.display());
            continue;
        }

        let config = match resolver::resolve_for_path(root, base, &dir)? {
            Resolution::Resolved(config) => config,
            Resolution::Ignored { marker: ignore } => {
                debug!(
                    "Ignoring module {} ({})",
                    dir.display(),
                    ignore.display()
                );
                continue;
            }
        };

        let enabled: Vec<&str> = registry
            .enabled_rules(&config)
            .iter()
            .map(|rule| rule.name())
            .collect();
        let module = Module::new(root, marker, config).with_enabled_rules(enabled);
        debug!(
            "Discovered module `{}` at {} with {} enabled rule(s)",
            module.name,
            module.relative_path.display(),
            module.enabled_rules.len()
        );
        modules.push(module);
    }

    Ok(modules)
}

/// Expands every marker pattern under `root`, in pattern order.
fn find_markers(root: &Path, config: &Config) -> Result<Vec<PathBuf>, LintError> {
    let prefix = glob::Pattern::escape(&root.to_string_lossy());
    let mut markers = Vec::new();

    for pattern in config.module_markers() {
        let pattern = pattern.trim_start_matches("./").trim_start_matches('/');
        let full = format!("{prefix}/{pattern}");

        for entry in glob::glob_with(&full, MATCH_OPTIONS)? {
            let path = entry.map_err(|e| LintError::Io(e.into()))?;
            if path.is_file() {
                markers.push(path);
            }
        }
    }

    Ok(markers)
}

/// Loads the root `.gitignore`, if there is one.
fn load_gitignore(root: &Path) -> Option<Gitignore> {
    let path = root.join(".gitignore");
    if !path.is_file() {
        return None;
    }

    let mut builder = GitignoreBuilder::new(root);
    if let Some(err) = builder.add(&path) {
        warn!("Failed to read {}: {}", path.display(), err);
    }
    match builder.build() {
        Ok(gitignore) => Some(gitignore),
        Err(err) => {
            warn!("Ignoring invalid {}: {}", path.display(), err);
            None
        }
    }
}
