//! Configuration types for monolinter.
//!
//! A `.monolinter.json` document looks like:
//!
//! ```json
//! {
//!   "module-markers": ["**/serverless.yml"],
//!   "use-gitignore": true,
//!   "rules": {
//!     "serverless-same-name": true,
//!     "module-required-files": { "enabled": true, "files": ["README.md"] }
//!   }
//! }
//! ```
//!
//! Every field is optional so that a document only overrides what it
//! mentions. See [`Config::merge`] for how documents are layered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Marker patterns used when no document sets `module-markers`.
pub const DEFAULT_MODULE_MARKERS: &[&str] = &["**/package.json", "**/serverless.yml"];

/// A single configuration document, or the effective result of merging several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Glob patterns (relative to the repository root) of files marking a module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_markers: Option<Vec<String>>,

    /// Whether marker matches ignored by the root `.gitignore` are skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_gitignore: Option<bool>,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Creates an empty document that overrides nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in default configuration.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            module_markers: Some(
                DEFAULT_MODULE_MARKERS
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            ),
            use_gitignore: Some(true),
            rules: BTreeMap::new(),
        }
    }

    /// Loads a configuration document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error naming `path` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parses a configuration document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or has the wrong shape.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Merges a child document onto this configuration.
    ///
    /// The child always wins:
    /// - scalar fields present in `child` replace ours
    /// - list fields present in `child` replace ours whole (never appended)
    /// - `rules` are merged per rule name with [`RuleConfig::merge`]
    ///
    /// Merging a configuration with itself leaves it unchanged.
    pub fn merge(&mut self, child: Config) {
        if let Some(markers) = child.module_markers {
            self.module_markers = Some(markers);
        }
        if let Some(use_gitignore) = child.use_gitignore {
            self.use_gitignore = Some(use_gitignore);
        }
        for (name, rule) in child.rules {
            match self.rules.entry(name) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(rule),
                Entry::Vacant(entry) => {
                    entry.insert(rule);
                }
            }
        }
    }

    /// Consuming variant of [`Config::merge`].
    #[must_use]
    pub fn merged(mut self, child: Config) -> Self {
        self.merge(child);
        self
    }

    /// Returns the effective marker patterns.
    #[must_use]
    pub fn module_markers(&self) -> Vec<&str> {
        match &self.module_markers {
            Some(markers) => markers.iter().map(String::as_str).collect(),
            None => DEFAULT_MODULE_MARKERS.to_vec(),
        }
    }

    /// Returns whether `.gitignore` filtering is on.
    #[must_use]
    pub fn use_gitignore(&self) -> bool {
        self.use_gitignore.unwrap_or(true)
    }

    /// Gets the configuration entry for a rule, if any document mentions it.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Checks if a rule is enabled, falling back to the rule's own default
    /// when no document sets `enabled` for it.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str, default: bool) -> bool {
        self.rules
            .get(rule_name)
            .and_then(|c| c.enabled)
            .unwrap_or(default)
    }
}

/// Per-rule configuration.
///
/// In JSON a rule entry is either a boolean (shorthand for `enabled`) or an
/// object with an optional `enabled` key plus rule-specific options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RuleSetting")]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSetting {
    Toggle(bool),
    Detailed {
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(flatten)]
        options: Map<String, Value>,
    },
}

impl From<RuleSetting> for RuleConfig {
    fn from(setting: RuleSetting) -> Self {
        match setting {
            RuleSetting::Toggle(enabled) => Self::enabled(enabled),
            RuleSetting::Detailed { enabled, options } => Self { enabled, options },
        }
    }
}

impl RuleConfig {
    /// Creates an entry that only sets `enabled`.
    #[must_use]
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            options: Map::new(),
        }
    }

    /// Sets an option value.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Merges a child entry onto this one: `enabled` and every option the
    /// child sets replace ours; option values are replaced whole.
    pub fn merge(&mut self, child: RuleConfig) {
        if child.enabled.is_some() {
            self.enabled = child.enabled;
        }
        for (key, value) in child.options {
            self.options.insert(key, value);
        }
    }

    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets a string option.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Gets a string array option. Non-string items are skipped.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Option<Vec<String>> {
        self.options.get(key).and_then(Value::as_array).map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(monolinter::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A config file is not valid JSON or has the wrong shape.
    #[error("Failed to parse config file {path}: {source}")]
    #[diagnostic(
        code(monolinter::config::parse),
        help("`.monolinter.json` must be a JSON object; rule entries are booleans or objects")
    )]
    Parse {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A directory handed to the resolver is not below the repository root.
    #[error("{path} is not inside the repository root {root}")]
    #[diagnostic(code(monolinter::config::outside_root))]
    OutsideRoot {
        /// Directory that was being resolved.
        path: PathBuf,
        /// Repository root.
        root: PathBuf,
    },
}
