//! The built-in rule catalog.

use crate::{
    ModuleNameRegex, ModuleRequiredFiles, PackageJsonSameName, RootRequiredFiles,
    ServerlessSameName,
};
use monolinter_core::{Registry, RuleBox};

/// Returns all built-in rules, in registration order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ServerlessSameName::new()),
        Box::new(PackageJsonSameName::new()),
        Box::new(ModuleNameRegex::new()),
        Box::new(ModuleRequiredFiles::new()),
        Box::new(RootRequiredFiles::new()),
    ]
}

/// Returns a registry holding every built-in rule.
#[must_use]
pub fn builtin_registry() -> Registry {
    all_rules().into_iter().collect()
}

/// Returns a registry holding only the named built-in rules.
///
/// Unknown names are reported back instead of failing.
#[must_use]
pub fn filtered_registry(names: &[&str]) -> (Registry, Vec<String>) {
    let mut registry = Registry::new();
    let mut unknown = Vec::new();

    for name in names {
        match all_rules().into_iter().find(|rule| rule.name() == *name) {
            Some(rule) => registry.register_box(rule),
            None => unknown.push((*name).to_string()),
        }
    }

    (registry, unknown)
}
