//! Hierarchical configuration resolution.
//!
//! The effective configuration for a module directory is built in layers,
//! later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`Config::defaults`])
//! 2. `--config` path if given, else `{root}/.monolinter.json`
//! 3. `.monolinter.json` in every directory below the root, down to and
//!    including the module directory, outermost first
//!
//! A `.monolinterignore` file in any directory from the root down to the
//! module directory excludes the module, regardless of configs further down.

use crate::config::{Config, ConfigError};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Well-known name of a per-directory configuration document.
pub const CONFIG_FILE_NAME: &str = ".monolinter.json";

/// Well-known name of the ignore marker.
pub const IGNORE_FILE_NAME: &str = ".monolinterignore";

/// Where the base configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found at the repository root.
    Project(PathBuf),
    /// No config found; defaults are used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if no document was found and defaults are in effect.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// The repository-wide configuration and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConfig {
    /// Defaults with the root document merged on top.
    pub config: Config,
    /// Document the configuration was loaded from.
    pub source: ConfigSource,
}

/// Outcome of resolving the configuration for one directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The effective configuration for the directory.
    Resolved(Config),
    /// An ignore marker was found on the way down; the directory is excluded.
    Ignored {
        /// The ignore marker that excluded it.
        marker: PathBuf,
    },
}

/// Loads the base configuration for a repository root.
///
/// A missing root document is not an error: the built-in defaults are used
/// and the fact is logged.
///
/// # Errors
///
/// Returns an error if the root document exists but cannot be read or parsed.
pub fn load_base(root: &Path) -> Result<Config, ConfigError> {
    load_base_with(root, None).map(|base| base.config)
}

/// Loads the base configuration, optionally from an explicit document that
/// replaces the root lookup.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed. An explicit
/// path that does not exist is an error.
pub fn load_base_with(root: &Path, explicit: Option<&Path>) -> Result<BaseConfig, ConfigError> {
    let source = locate(root, explicit);
    let mut config = Config::defaults();

    match source.path() {
        Some(path) => {
            debug!("Loading base config from {}", path.display());
            config.merge(Config::from_file(path)?);
        }
        None => info!(
            "No {CONFIG_FILE_NAME} found in {}, using default configuration",
            root.display()
        ),
    }

    Ok(BaseConfig { config, source })
}

fn locate(root: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let candidate = root.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        return ConfigSource::Project(candidate);
    }

    ConfigSource::Default
}

/// Resolves the effective configuration for `dir`, starting from `base`.
///
/// Walks from `root` to `dir` one path segment at a time. At each level the
/// ignore marker is checked first, then the level's config document (if any)
/// is merged on top. The root's own document is expected to be part of
/// `base` already and is not read again.
///
/// # Errors
///
/// Returns an error if `dir` is not under `root`, or if any document on the
/// path cannot be read or parsed. A broken document is fatal even when an
/// ignore marker sits further down.
pub fn resolve_for_path(root: &Path, base: &Config, dir: &Path) -> Result<Resolution, ConfigError> {
    let outside = || ConfigError::OutsideRoot {
        path: dir.to_path_buf(),
        root: root.to_path_buf(),
    };
    let relative = dir.strip_prefix(root).map_err(|_| outside())?;
    if !is_contained(relative) {
        return Err(outside());
    }

    let mut current = root.to_path_buf();
    if let Some(marker) = ignore_marker(&current) {
        return Ok(Resolution::Ignored { marker });
    }

    let mut config = base.clone();
    for segment in relative.components() {
        current.push(segment);

        if let Some(marker) = ignore_marker(&current) {
            return Ok(Resolution::Ignored { marker });
        }

        let document = current.join(CONFIG_FILE_NAME);
        if document.is_file() {
            debug!("Merging {}", document.display());
            config.merge(Config::from_file(&document)?);
        }
    }

    Ok(Resolution::Resolved(config))
}

/// Returns true if `relative` only descends (no `..`, `.`, root or prefix).
pub(crate) fn is_contained(relative: &Path) -> bool {
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
}

fn ignore_marker(dir: &Path) -> Option<PathBuf> {
    let marker = dir.join(IGNORE_FILE_NAME);
    marker.exists().then_some(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn resolved(resolution: Resolution) -> Config {
        match resolution {
            Resolution::Resolved(config) => config,
            Resolution::Ignored { marker } => panic!("unexpectedly ignored by {}", marker.display()),
        }
    }

    #[test]
    fn missing_root_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let base = load_base_with(tmp.path(), None).unwrap();
        assert_eq!(base.source, ConfigSource::Default);
        assert_eq!(base.config, Config::defaults());
    }

    #[test]
    fn root_config_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            CONFIG_FILE_NAME,
            r#"{ "module-markers": ["**/Chart.yaml"] }"#,
        );

        let base = load_base_with(tmp.path(), None).unwrap();
        assert_eq!(
            base.source,
            ConfigSource::Project(tmp.path().join(CONFIG_FILE_NAME))
        );
        assert_eq!(base.config.module_markers(), vec!["**/Chart.yaml"]);
        assert!(base.config.use_gitignore());
    }

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), CONFIG_FILE_NAME, r#"{ "use-gitignore": true }"#);
        let explicit = tmp.path().join("custom.json");
        fs::write(&explicit, r#"{ "use-gitignore": false }"#).unwrap();

        let base = load_base_with(tmp.path(), Some(&explicit)).unwrap();
        assert_eq!(base.source, ConfigSource::Explicit(explicit));
        assert!(!base.config.use_gitignore());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_base_with(tmp.path(), Some(&tmp.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn broken_root_config_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), CONFIG_FILE_NAME, "{ broken");
        let err = load_base(tmp.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn deeper_config_overrides_every_ancestor() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, CONFIG_FILE_NAME, r#"{ "rules": { "r": { "level": "root" } } }"#);
        write(&root.join("a"), CONFIG_FILE_NAME, r#"{ "rules": { "r": { "level": "a" } } }"#);
        // b and c have no documents
        let leaf = root.join("a/b/c/d");
        write(&leaf, CONFIG_FILE_NAME, r#"{ "rules": { "r": { "level": "d" } } }"#);

        let base = load_base(root).unwrap();
        let config = resolved(resolve_for_path(root, &base, &leaf).unwrap());
        assert_eq!(config.rule("r").unwrap().get_str("level"), Some("d"));

        let mid = resolved(resolve_for_path(root, &base, &root.join("a/b/c")).unwrap());
        assert_eq!(mid.rule("r").unwrap().get_str("level"), Some("a"));
    }

    #[test]
    fn resolving_the_root_returns_base() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), CONFIG_FILE_NAME, r#"{ "rules": { "r": false } }"#);
        let base = load_base(tmp.path()).unwrap();

        let config = resolved(resolve_for_path(tmp.path(), &base, tmp.path()).unwrap());
        assert_eq!(config, base);
    }

    #[test]
    fn ignore_marker_wins_over_deeper_config() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(&root.join("legacy"), IGNORE_FILE_NAME, "");
        write(&root.join("legacy/svc"), CONFIG_FILE_NAME, r#"{ "rules": { "r": true } }"#);

        let base = load_base(root).unwrap();
        let resolution = resolve_for_path(root, &base, &root.join("legacy/svc")).unwrap();
        assert_eq!(
            resolution,
            Resolution::Ignored {
                marker: root.join("legacy").join(IGNORE_FILE_NAME)
            }
        );
    }

    #[test]
    fn ignore_marker_in_module_dir_itself() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(&root.join("svc"), IGNORE_FILE_NAME, "");

        let base = load_base(root).unwrap();
        let resolution = resolve_for_path(root, &base, &root.join("svc")).unwrap();
        assert!(matches!(resolution, Resolution::Ignored { .. }));
    }

    #[test]
    fn ignore_marker_at_root_excludes_everything() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, IGNORE_FILE_NAME, "");
        fs::create_dir_all(root.join("svc")).unwrap();

        let base = load_base(root).unwrap();
        let resolution = resolve_for_path(root, &base, &root.join("svc")).unwrap();
        assert!(matches!(resolution, Resolution::Ignored { .. }));
    }

    #[test]
    fn broken_intermediate_config_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(&root.join("group"), CONFIG_FILE_NAME, "[1, 2");
        fs::create_dir_all(root.join("group/svc")).unwrap();

        let base = load_base(root).unwrap();
        let err = resolve_for_path(root, &base, &root.join("group/svc")).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => {
                assert_eq!(path, root.join("group").join(CONFIG_FILE_NAME));
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn directory_outside_root_is_rejected() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let base = Config::defaults();
        let err = resolve_for_path(root.path(), &base, other.path()).unwrap_err();
        assert!(matches!(err, ConfigError::OutsideRoot { .. }));
    }

    #[test]
    fn parent_segments_cannot_escape_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("repo");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(tmp.path().join("outside/x")).unwrap();
        fs::write(tmp.path().join("outside").join(CONFIG_FILE_NAME), "{ broken").unwrap();

        let dir = root.join("../outside/x");
        let err = resolve_for_path(&root, &Config::defaults(), &dir).unwrap_err();
        assert!(matches!(err, ConfigError::OutsideRoot { .. }));
    }

    #[test]
    fn config_source_path_returns_none_for_default() {
        assert!(ConfigSource::Default.path().is_none());
        assert!(ConfigSource::Default.is_default());
        let p = PathBuf::from("/tmp/.monolinter.json");
        assert_eq!(ConfigSource::Project(p.clone()).path(), Some(p.as_path()));
        assert_eq!(ConfigSource::Explicit(p.clone()).path(), Some(p.as_path()));
    }
}
