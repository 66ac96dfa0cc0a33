//! Rule requiring a Serverless service name to match its module directory.

use crate::manifest;
use monolinter_core::{Module, Rule, RuleError, RuleOutcome};
use serde::Deserialize;
use std::path::Path;

/// Rule name for serverless-same-name.
pub const NAME: &str = "serverless-same-name";

const MANIFESTS: &[&str] = &["serverless.yml", "serverless.yaml"];

/// Checks that `service` in `serverless.yml` equals the module name.
///
/// Modules without a Serverless manifest are skipped. The rule is not
/// applicable when none of its modules has one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerlessSameName;

#[derive(Deserialize)]
struct ServerlessManifest {
    #[serde(default)]
    service: Option<Service>,
}

/// `service: foo` or the older `service: { name: foo }` form.
#[derive(Deserialize)]
#[serde(untagged)]
enum Service {
    Name(String),
    Detailed { name: String },
}

impl ServerlessManifest {
    fn service_name(&self) -> Option<&str> {
        match self.service.as_ref()? {
            Service::Name(name) | Service::Detailed { name } => Some(name.as_str()),
        }
    }
}

impl ServerlessSameName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ServerlessSameName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Serverless `service` must match the module directory name"
    }

    fn check_modules(&self, modules: &[&Module], _root: &Path) -> Result<RuleOutcome, RuleError> {
        let mut findings = Vec::new();

        for module in modules {
            let Some((file, path)) = manifest::find(module, MANIFESTS) else {
                tracing::debug!("{}: no serverless manifest in {}", NAME, module.name);
                continue;
            };
            let parsed: ServerlessManifest = manifest::read_yaml(&path)?;
            findings.push(manifest::same_name(
                module,
                module.resource(file),
                "service",
                parsed.service_name(),
            ));
        }

        if findings.is_empty() {
            return Ok(RuleOutcome::NotApplicable);
        }
        Ok(findings.into())
    }
}
