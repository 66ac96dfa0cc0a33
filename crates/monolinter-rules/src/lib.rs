//! # monolinter-rules
//!
//! Built-in lint rules for monolinter.
//!
//! ## Available Rules
//!
//! | Name | Scope | Default | Description |
//! |------|-------|---------|-------------|
//! | `serverless-same-name` | module | on | `service` in `serverless.yml` matches the module name |
//! | `packagejson-same-name` | module | on | `name` in `package.json` matches the module name |
//! | `module-name-regex` | module | on | module name matches the `pattern` option |
//! | `module-required-files` | module | off | module contains every file in `files` |
//! | `root-required-files` | base | off | repository root contains every file in `files` |
//!
//! ## Usage
//!
//! ```ignore
//! use monolinter_core::Linter;
//! use monolinter_rules::builtin_registry;
//!
//! let registry = builtin_registry();
//! let result = Linter::builder().root(".").build(&registry)?.lint()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manifest;
mod module_name_regex;
mod packagejson_same_name;
mod presets;
mod required_files;
mod serverless_same_name;

pub use module_name_regex::ModuleNameRegex;
pub use packagejson_same_name::PackageJsonSameName;
pub use presets::{all_rules, builtin_registry, filtered_registry};
pub use required_files::{ModuleRequiredFiles, RootRequiredFiles};
pub use serverless_same_name::ServerlessSameName;

/// Re-export core types for convenience.
pub use monolinter_core::{Finding, Rule, RuleOutcome};
