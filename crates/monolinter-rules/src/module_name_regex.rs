//! Rule enforcing a naming convention for module directories.

use monolinter_core::{Finding, Module, Rule, RuleError, RuleOutcome};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// Rule name for module-name-regex.
pub const NAME: &str = "module-name-regex";

/// Pattern used when the `pattern` option is not set.
pub const DEFAULT_PATTERN: &str = "^[a-z0-9][a-z0-9._-]*$";

/// Checks every module name against a regular expression.
///
/// The pattern comes from the `pattern` option of each module's own
/// configuration, so subtrees may use different conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleNameRegex;

impl ModuleNameRegex {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn pattern_for(module: &Module) -> &str {
    module
        .config
        .rule(NAME)
        .and_then(|c| c.get_str("pattern"))
        .unwrap_or(DEFAULT_PATTERN)
}

impl Rule for ModuleNameRegex {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Module directory names must match the `pattern` option"
    }

    fn check_modules(&self, modules: &[&Module], _root: &Path) -> Result<RuleOutcome, RuleError> {
        if modules.is_empty() {
            return Ok(RuleOutcome::NotApplicable);
        }

        let mut compiled: HashMap<&str, Regex> = HashMap::new();
        let mut findings = Vec::with_capacity(modules.len());

        for module in modules {
            let pattern = pattern_for(module);
            if !compiled.contains_key(pattern) {
                let regex = Regex::new(pattern).map_err(|e| RuleError::InvalidOption {
                    option: format!("{NAME}.pattern"),
                    message: e.to_string(),
                })?;
                compiled.insert(pattern, regex);
            }

            let resource = module.relative_path.to_string_lossy().into_owned();
            let finding = if compiled[pattern].is_match(&module.name) {
                Finding::valid(resource)
            } else {
                Finding::invalid(
                    resource,
                    format!("module name `{}` does not match `{pattern}`", module.name),
                )
            };
            findings.push(finding.for_module(module));
        }

        Ok(findings.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monolinter_core::{Config, RuleConfig};

    fn module(dir: &str, pattern: Option<&str>) -> Module {
        let mut config = Config::defaults();
        if let Some(pattern) = pattern {
            config.rules.insert(
                NAME.to_string(),
                RuleConfig::default().with_option("pattern", pattern),
            );
        }
        Module::new(Path::new("/repo"), format!("/repo/{dir}/package.json"), config)
    }

    fn validity(modules: &[Module]) -> Vec<bool> {
        let refs: Vec<&Module> = modules.iter().collect();
        ModuleNameRegex::new()
            .check_modules(&refs, Path::new("/repo"))
            .unwrap()
            .into_findings()
            .unwrap()
            .iter()
            .map(|f| f.valid)
            .collect()
    }

    #[test]
    fn test_default_pattern() {
        let modules = vec![
            module("services/orders", None),
            module("services/Orders", None),
            module("services/order_v2.api", None),
            module("services/-bad", None),
        ];
        assert_eq!(validity(&modules), vec![true, false, true, false]);
    }

    #[test]
    fn test_per_module_pattern() {
        let modules = vec![
            module("svc/svc-orders", Some("^svc-")),
            module("lib/orders", Some("^svc-")),
            module("lib/utils", Some("^[a-z]+$")),
        ];
        assert_eq!(validity(&modules), vec![true, false, true]);
    }

    #[test]
    fn test_resource_is_module_path() {
        let modules = [module("services/orders", None)];
        let findings = ModuleNameRegex::new()
            .check_modules(&[&modules[0]], Path::new("/repo"))
            .unwrap()
            .into_findings()
            .unwrap();
        assert_eq!(findings[0].resource, "services/orders");
        assert_eq!(findings[0].module.as_ref().unwrap().name, "orders");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let modules = [module("orders", Some("(unclosed"))];
        let err = ModuleNameRegex::new()
            .check_modules(&[&modules[0]], Path::new("/repo"))
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidOption { .. }));
    }

    #[test]
    fn test_not_applicable_for_empty_subset() {
        assert_eq!(
            ModuleNameRegex::new()
                .check_modules(&[], Path::new("/repo"))
                .unwrap(),
            RuleOutcome::NotApplicable
        );
    }
}
