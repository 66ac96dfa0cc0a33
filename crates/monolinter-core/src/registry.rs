//! Catalog of available rules.

use crate::config::Config;
use crate::rule::{Rule, RuleBox};

/// An append-only list of rule implementations.
///
/// Build one at start-up and lend it to the [`Linter`](crate::Linter).
/// Registering the same rule twice yields two entries.
#[derive(Default)]
pub struct Registry {
    rules: Vec<RuleBox>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Adds a boxed rule.
    pub fn register_box(&mut self, rule: RuleBox) {
        self.rules.push(rule);
    }

    /// Builder-style variant of [`Registry::register`].
    #[must_use]
    pub fn with<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.register(rule);
        self
    }

    /// Returns every registered rule, in registration order.
    #[must_use]
    pub fn all_rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the rules `config` enables, in registration order.
    #[must_use]
    pub fn enabled_rules(&self, config: &Config) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .filter(|rule| config.is_rule_enabled(rule.name(), rule.enabled_by_default()))
            .map(|rule| &**rule)
            .collect()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RuleBox> for Registry {
    fn from_iter<I: IntoIterator<Item = RuleBox>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}
