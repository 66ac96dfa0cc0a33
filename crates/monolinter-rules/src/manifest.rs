//! Helpers for reading module manifests.

use monolinter_core::{Finding, Module, RuleError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Returns the first of `names` that exists as a file in the module.
pub(crate) fn find(module: &Module, names: &[&'static str]) -> Option<(&'static str, PathBuf)> {
    names
        .iter()
        .map(|name| (*name, module.file(name)))
        .find(|(_, path)| path.is_file())
}

fn read(path: &Path) -> Result<String, RuleError> {
    std::fs::read_to_string(path).map_err(|e| RuleError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads and deserializes a JSON manifest.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RuleError> {
    serde_json::from_str(&read(path)?).map_err(|e| RuleError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reads and deserializes a YAML manifest.
pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, RuleError> {
    serde_yaml::from_str(&read(path)?).map_err(|e| RuleError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Compares a declared name against the module name.
pub(crate) fn same_name(
    module: &Module,
    resource: String,
    field: &str,
    declared: Option<&str>,
) -> Finding {
    let finding = match declared {
        Some(name) if name == module.name => Finding::valid(resource),
        Some(name) => Finding::invalid(
            resource,
            format!(
                "`{field}` is `{name}` but the module directory is `{}`",
                module.name
            ),
        ),
        None => Finding::invalid(resource, format!("no `{field}` declared")),
    };
    finding.for_module(module)
}
