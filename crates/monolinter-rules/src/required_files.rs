//! Rules requiring files to exist at the repository root or in each module.

use monolinter_core::{
    Config, Finding, Module, Rule, RuleConfig, RuleError, RuleOutcome, RuleScope,
};
use std::path::Path;

/// Rule name for module-required-files.
pub const MODULE_NAME: &str = "module-required-files";

/// Rule name for root-required-files.
pub const ROOT_NAME: &str = "root-required-files";

/// Files required when the `files` option is not set.
pub const DEFAULT_FILES: &[&str] = &["README.md"];

fn required_files(config: Option<&RuleConfig>) -> Vec<String> {
    config
        .and_then(|c| c.get_str_array("files"))
        .unwrap_or_else(|| DEFAULT_FILES.iter().map(|s| (*s).to_string()).collect())
}

fn presence(resource: String, path: &Path) -> Finding {
    if path.exists() {
        Finding::valid(resource)
    } else {
        Finding::invalid(resource, "required file is missing")
    }
}

/// Requires every module to contain the files listed in `files`.
///
/// Disabled unless a configuration enables it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleRequiredFiles;

impl ModuleRequiredFiles {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModuleRequiredFiles {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn description(&self) -> &'static str {
        "Each module must contain the files listed in `files`"
    }

    fn enabled_by_default(&self) -> bool {
        false
    }

    fn check_modules(&self, modules: &[&Module], _root: &Path) -> Result<RuleOutcome, RuleError> {
        if modules.is_empty() {
            return Ok(RuleOutcome::NotApplicable);
        }

        let mut findings = Vec::new();
        for module in modules {
            for file in required_files(module.config.rule(MODULE_NAME)) {
                let finding = presence(module.resource(&file), &module.file(&file));
                findings.push(finding.for_module(module));
            }
        }
        Ok(findings.into())
    }
}

/// Requires the repository root to contain the files listed in `files`.
///
/// Disabled unless a configuration enables it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootRequiredFiles;

impl RootRequiredFiles {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RootRequiredFiles {
    fn name(&self) -> &'static str {
        ROOT_NAME
    }

    fn description(&self) -> &'static str {
        "The repository root must contain the files listed in `files`"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Base
    }

    fn enabled_by_default(&self) -> bool {
        false
    }

    fn check(&self, root: &Path, config: &Config) -> Result<RuleOutcome, RuleError> {
        Ok(required_files(config.rule(ROOT_NAME))
            .into_iter()
            .map(|file| {
                let path = root.join(&file);
                presence(file, &path)
            })
            .collect::<Vec<_>>()
            .into())
    }
}
