//! # monolinter-core
//!
//! Core framework for linting a monorepo's module layout.
//!
//! This crate decides *which* rule runs against *which* module with *which*
//! settings. It includes:
//!
//! - [`Config`] and its child-wins merge for `.monolinter.json` documents
//! - [`resolver`] for layering documents down a directory path
//! - [`discover`] for turning marker files into [`Module`]s
//! - [`Rule`] trait and the [`Registry`] that holds rules
//! - [`Linter`] for orchestrating a lint run into a [`LintResult`]
//!
//! ## Example
//!
//! ```ignore
//! use monolinter_core::{Linter, Registry};
//!
//! let registry = Registry::new().with(MyRule::new());
//! let linter = Linter::builder().root(".").build(&registry)?;
//!
//! let result = linter.lint()?;
//! for finding in result.invalid() {
//!     println!("{finding}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod discovery;
mod linter;
mod module;
mod registry;
mod rule;
mod types;

/// Hierarchical configuration resolution.
pub mod resolver;

pub use config::{Config, ConfigError, RuleConfig, DEFAULT_MODULE_MARKERS};
pub use discovery::discover;
pub use linter::{lint, LintError, Linter, LinterBuilder};
pub use module::{Module, ModuleRef};
pub use registry::Registry;
pub use resolver::{BaseConfig, ConfigSource, Resolution, CONFIG_FILE_NAME, IGNORE_FILE_NAME};
pub use rule::{Rule, RuleBox, RuleError, RuleOutcome, RuleScope};
pub use types::{Finding, LintResult, RuleResult};
