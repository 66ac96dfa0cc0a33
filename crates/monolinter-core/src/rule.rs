//! Rule trait for defining lint rules.

use crate::config::Config;
use crate::module::Module;
use crate::types::Finding;
use std::path::{Path, PathBuf};

/// What a rule reports for one invocation.
///
/// `NotApplicable` and `Findings(vec![])` are different: the first means the
/// rule skipped this run, the second that it ran and found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule does not apply to this run.
    NotApplicable,
    /// The rule ran and produced these findings (possibly none).
    Findings(Vec<Finding>),
}

impl RuleOutcome {
    /// Returns `true` unless the rule skipped the run.
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Findings(_))
    }

    /// Returns the findings, or `None` if the rule skipped the run.
    #[must_use]
    pub fn into_findings(self) -> Option<Vec<Finding>> {
        match self {
            Self::NotApplicable => None,
            Self::Findings(findings) => Some(findings),
        }
    }
}

impl From<Vec<Finding>> for RuleOutcome {
    fn from(findings: Vec<Finding>) -> Self {
        Self::Findings(findings)
    }
}

/// Which check a rule actually implements. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Runs once against the whole repository.
    Base,
    /// Runs against the set of modules that enable it.
    Module,
}

impl std::fmt::Display for RuleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Module => write!(f, "module"),
        }
    }
}

/// A monorepo lint rule.
///
/// A rule has two checks, and either may decline with
/// [`RuleOutcome::NotApplicable`] (the default):
///
/// - [`Rule::check`] runs once per lint against the repository root
/// - [`Rule::check_modules`] runs once per lint with every module that
///   enables the rule, possibly none
///
/// Rules only read the file tree. The linter stamps the rule name onto every
/// finding; module rules attach the module themselves via
/// [`Finding::for_module`].
///
/// # Example
///
/// ```ignore
/// use monolinter_core::{Finding, Module, Rule, RuleError, RuleOutcome};
/// use std::path::Path;
///
/// pub struct RequireReadme;
///
/// impl Rule for RequireReadme {
///     fn name(&self) -> &'static str { "require-readme" }
///
///     fn check_modules(&self, modules: &[&Module], _root: &Path) -> Result<RuleOutcome, RuleError> {
///         Ok(modules
///             .iter()
///             .map(|m| Finding::new(m.resource("README.md"), m.file("README.md").exists()).for_module(m))
///             .collect::<Vec<_>>()
///             .into())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "serverless-same-name").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns which check this rule implements.
    fn scope(&self) -> RuleScope {
        RuleScope::Module
    }

    /// Whether the rule runs when no configuration mentions it.
    fn enabled_by_default(&self) -> bool {
        true
    }

    /// Checks the repository as a whole.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule cannot complete; the lint run aborts.
    fn check(&self, _root: &Path, _config: &Config) -> Result<RuleOutcome, RuleError> {
        Ok(RuleOutcome::NotApplicable)
    }

    /// Checks the modules that enable this rule, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule cannot complete; the lint run aborts.
    fn check_modules(&self, _modules: &[&Module], _root: &Path) -> Result<RuleOutcome, RuleError> {
        Ok(RuleOutcome::NotApplicable)
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Errors a rule can raise while checking.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RuleError {
    /// IO error reading a file under check.
    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(monolinter::rule::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A file under check could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    #[diagnostic(code(monolinter::rule::parse))]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// A rule option has an unusable value.
    #[error("Invalid option `{option}`: {message}")]
    #[diagnostic(code(monolinter::rule::option))]
    InvalidOption {
        /// Option key.
        option: String,
        /// What is wrong with it.
        message: String,
    },
}
