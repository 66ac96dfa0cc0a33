//! Discovered monorepo modules.

use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One discovered unit of the monorepo.
///
/// A module is the directory containing a marker file. Modules are created
/// once per discovery pass and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Module name: the name of the directory containing the marker file.
    pub name: String,
    /// Absolute path to the module directory.
    pub path: PathBuf,
    /// Module directory relative to the repository root.
    pub relative_path: PathBuf,
    /// Marker file that identified this module.
    pub marker: PathBuf,
    /// Effective configuration after merging every document down the path.
    pub config: Config,
    /// Names of the rules enabled for this module.
    pub enabled_rules: BTreeSet<String>,
}

impl Module {
    /// Creates a module from the marker file that identified it.
    ///
    /// The module directory is the marker's parent and the module name is
    /// that directory's last segment. A marker sitting directly in `root`
    /// yields a module named after the root directory.
    #[must_use]
    pub fn new(root: &Path, marker: impl Into<PathBuf>, config: Config) -> Self {
        let marker = marker.into();
        let path = marker
            .parent()
            .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.clone(), Path::to_path_buf);

        Self {
            name,
            path,
            relative_path,
            marker,
            config,
            enabled_rules: BTreeSet::new(),
        }
    }

    /// Sets the enabled rule names.
    #[must_use]
    pub fn with_enabled_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `rule_name` is enabled for this module.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.enabled_rules.contains(rule_name)
    }

    /// Returns the path of a file inside the module directory.
    #[must_use]
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Returns the root-relative display path of a file inside the module.
    #[must_use]
    pub fn resource(&self, name: &str) -> String {
        self.relative_path.join(name).to_string_lossy().into_owned()
    }

    /// Returns a lightweight reference for attaching to findings.
    #[must_use]
    pub fn reference(&self) -> ModuleRef {
        ModuleRef {
            name: self.name.clone(),
            path: self.relative_path.clone(),
        }
    }
}

/// Back-reference from a finding to the module it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    /// Module name.
    pub name: String,
    /// Module directory relative to the repository root.
    pub path: PathBuf,
}
