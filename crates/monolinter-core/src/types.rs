//! Core types for findings and lint results.

use crate::module::{Module, ModuleRef};
use serde::{Deserialize, Serialize};

/// One outcome reported by a rule, before the linter stamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Resource that was evaluated (usually a root-relative file path).
    pub resource: String,
    /// Whether the resource passed the check.
    pub valid: bool,
    /// Human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Module the finding concerns, for module rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleRef>,
}

impl Finding {
    /// Creates a finding with an explicit validity flag.
    #[must_use]
    pub fn new(resource: impl Into<String>, valid: bool) -> Self {
        Self {
            resource: resource.into(),
            valid,
            message: None,
            module: None,
        }
    }

    /// Creates a passing finding.
    #[must_use]
    pub fn valid(resource: impl Into<String>) -> Self {
        Self::new(resource, true)
    }

    /// Creates a failing finding with a message.
    #[must_use]
    pub fn invalid(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(resource, false).with_message(message)
    }

    /// Adds a message to this finding.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches the module this finding concerns.
    #[must_use]
    pub fn for_module(mut self, module: &Module) -> Self {
        self.module = Some(module.reference());
        self
    }
}

/// A finding stamped with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Name of the owning rule.
    pub rule: String,
    /// Resource that was evaluated.
    pub resource: String,
    /// Whether the resource passed the check.
    pub valid: bool,
    /// Human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Module the result concerns, for module rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleRef>,
}

impl RuleResult {
    /// Stamps a finding with its rule name.
    #[must_use]
    pub fn new(rule: impl Into<String>, finding: Finding) -> Self {
        Self {
            rule: rule.into(),
            resource: finding.resource,
            valid: finding.valid,
            message: finding.message,
            module: finding.module,
        }
    }
}

impl std::fmt::Display for RuleResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.valid { "ok" } else { "invalid" };
        write!(f, "{}: {} [{}]", self.resource, status, self.rule)?;
        if let Some(message) = &self.message {
            write!(f, " {message}")?;
        }
        Ok(())
    }
}

/// Result of running a lint pass.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Every stamped finding, in the order rules reported them.
    pub results: Vec<RuleResult>,
    /// Number of modules discovered.
    pub modules_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any finding is invalid.
    #[must_use]
    pub fn has_invalid(&self) -> bool {
        self.results.iter().any(|r| !r.valid)
    }

    /// Returns the invalid findings.
    #[must_use]
    pub fn invalid(&self) -> Vec<&RuleResult> {
        self.results.iter().filter(|r| !r.valid).collect()
    }

    /// Returns the findings produced by one rule.
    #[must_use]
    pub fn by_rule(&self, rule: &str) -> Vec<&RuleResult> {
        self.results.iter().filter(|r| r.rule == rule).collect()
    }

    /// Counts findings as `(valid, invalid)`.
    #[must_use]
    pub fn count_by_validity(&self) -> (usize, usize) {
        let invalid = self.results.iter().filter(|r| !r.valid).count();
        (self.results.len() - invalid, invalid)
    }
}
