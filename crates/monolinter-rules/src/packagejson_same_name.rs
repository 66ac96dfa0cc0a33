//! Rule requiring an npm package name to match its module directory.

use crate::manifest;
use monolinter_core::{Module, Rule, RuleError, RuleOutcome};
use serde::Deserialize;
use std::path::Path;

/// Rule name for packagejson-same-name.
pub const NAME: &str = "packagejson-same-name";

const MANIFEST: &str = "package.json";

/// Checks that `name` in `package.json` equals the module name.
///
/// An npm scope (`@acme/`) is ignored for the comparison. Modules without a
/// `package.json` are skipped; the rule is not applicable when none of its
/// modules has one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonSameName;

#[derive(Deserialize)]
struct PackageJson {
    #[serde(default)]
    name: Option<String>,
}

impl PackageJsonSameName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Strips an npm scope: `@acme/orders` -> `orders`.
fn unscoped(name: &str) -> &str {
    if name.starts_with('@') {
        name.split_once('/').map_or(name, |(_, rest)| rest)
    } else {
        name
    }
}

impl Rule for PackageJsonSameName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "package.json `name` must match the module directory name"
    }

    fn check_modules(&self, modules: &[&Module], _root: &Path) -> Result<RuleOutcome, RuleError> {
        let mut findings = Vec::new();

        for module in modules {
            let Some((file, path)) = manifest::find(module, &[MANIFEST]) else {
                continue;
            };
            let package: PackageJson = manifest::read_json(&path)?;
            findings.push(manifest::same_name(
                module,
                module.resource(file),
                "name",
                package.name.as_deref().map(unscoped),
            ));
        }

        if findings.is_empty() {
            return Ok(RuleOutcome::NotApplicable);
        }
        Ok(findings.into())
    }
}
