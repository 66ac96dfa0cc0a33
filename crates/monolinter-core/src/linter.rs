//! Lint orchestration: base rules, module discovery, module rules.

use crate::config::ConfigError;
use crate::discovery;
use crate::module::Module;
use crate::registry::Registry;
use crate::resolver::{self, BaseConfig};
use crate::rule::{RuleError, RuleOutcome};
use crate::types::{LintResult, RuleResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort a lint run.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum LintError {
    /// IO error walking the tree.
    #[error("IO error: {0}")]
    #[diagnostic(code(monolinter::io))]
    Io(#[from] std::io::Error),

    /// The repository root cannot be used.
    #[error("Invalid root directory {path}: {source}")]
    #[diagnostic(code(monolinter::root))]
    Root {
        /// Root that was requested.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid marker glob pattern.
    #[error("Invalid glob pattern: {0}")]
    #[diagnostic(code(monolinter::pattern), help("check `module-markers` in .monolinter.json"))]
    Pattern(#[from] glob::PatternError),

    /// A configuration document failed to load.
    #[error("Configuration error: {0}")]
    #[diagnostic(code(monolinter::config))]
    Config(#[from] ConfigError),

    /// A rule failed while checking.
    #[error("Rule `{rule}` failed: {source}")]
    #[diagnostic(code(monolinter::rule))]
    Rule {
        /// Name of the failing rule.
        rule: String,
        /// Underlying rule error.
        source: RuleError,
    },
}

/// Builder for configuring a [`Linter`].
#[derive(Debug, Default)]
pub struct LinterBuilder {
    root: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repository root (default: current directory).
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Uses an explicit base configuration document instead of
    /// `{root}/.monolinter.json`.
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Builds the linter over `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory doesn't exist.
    pub fn build(self, registry: &Registry) -> Result<Linter<'_>, LintError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = root
            .canonicalize()
            .map_err(|source| LintError::Root { path: root, source })?;

        Ok(Linter {
            root,
            config_path: self.config_path,
            registry,
        })
    }
}

/// The orchestrator that runs every rule against a repository.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter<'r> {
    root: PathBuf,
    config_path: Option<PathBuf>,
    registry: &'r Registry,
}

impl<'r> Linter<'r> {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the canonical repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the registry rules are drawn from.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Loads the base configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base document cannot be read or parsed.
    pub fn base_config(&self) -> Result<BaseConfig, LintError> {
        Ok(resolver::load_base_with(
            &self.root,
            self.config_path.as_deref(),
        )?)
    }

    /// Discovers modules without running any rule.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or discovery fails.
    pub fn modules(&self) -> Result<Vec<Module>, LintError> {
        let base = self.base_config()?;
        discovery::discover(&self.root, &base.config, self.registry)
    }

    /// Runs every rule and returns the aggregated findings.
    ///
    /// 1. Base rules enabled by the base configuration run once.
    /// 2. Modules are discovered.
    /// 3. Every registered rule runs against the modules that enable it,
    ///    even when that subset is empty.
    ///
    /// Findings keep the order rules returned them in. Rules answering
    /// [`RuleOutcome::NotApplicable`] contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns an error, with no partial results, if configuration loading
    /// or discovery fails or any rule fails.
    pub fn lint(&self) -> Result<LintResult, LintError> {
        info!("Starting lint at {}", self.root.display());

        let base = self.base_config()?;
        let mut result = LintResult::new();

        for rule in self.registry.enabled_rules(&base.config) {
            debug!("Running base check: {}", rule.name());
            let outcome = rule
                .check(&self.root, &base.config)
                .map_err(|source| LintError::Rule {
                    rule: rule.name().to_string(),
                    source,
                })?;
            record(&mut result, rule.name(), outcome);
        }

        let modules = discovery::discover(&self.root, &base.config, self.registry)?;
        info!("Found {} module(s) to check", modules.len());

        for rule in self.registry.all_rules() {
            let subset: Vec<&Module> = modules
                .iter()
                .filter(|m| m.is_rule_enabled(rule.name()))
                .collect();
            debug!(
                "Running module check: {} on {} module(s)",
                rule.name(),
                subset.len()
            );
            let outcome = rule
                .check_modules(&subset, &self.root)
                .map_err(|source| LintError::Rule {
                    rule: rule.name().to_string(),
                    source,
                })?;
            record(&mut result, rule.name(), outcome);
        }

        result.modules_checked = modules.len();

        info!(
            "Lint complete: {} result(s), {} invalid, {} module(s)",
            result.results.len(),
            result.invalid().len(),
            result.modules_checked
        );

        Ok(result)
    }
}

/// Runs a lint over `root` with the default settings.
///
/// # Errors
///
/// See [`Linter::lint`].
pub fn lint(root: impl Into<PathBuf>, registry: &Registry) -> Result<LintResult, LintError> {
    Linter::builder().root(root).build(registry)?.lint()
}

fn record(result: &mut LintResult, rule: &str, outcome: RuleOutcome) {
    match outcome {
        RuleOutcome::NotApplicable => debug!("Rule not applicable: {rule}"),
        RuleOutcome::Findings(findings) => result
            .results
            .extend(findings.into_iter().map(|f| RuleResult::new(rule, f))),
    }
}
