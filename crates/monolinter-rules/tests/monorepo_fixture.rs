//! Integration test: built-in rules end-to-end via `Linter`.
//!
//! Uses the fixture monorepo under `tests/fixtures/monorepo/`:
//!
//! - `services/svc-a` declares `service: svc-a` and `@acme/svc-a` (valid)
//! - `services/svc-b` declares `service: { name: svc-b }` (valid)
//! - `services/svc-c` declares `service: billing-service` (invalid)
//! - `legacy/old-svc` sits under a `.monolinterignore` and is never linted

use monolinter_core::{lint, Linter, Registry, RuleResult};
use monolinter_rules::{builtin_registry, ServerlessSameName};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/monorepo")
}

fn summary(results: &[&RuleResult]) -> Vec<(String, bool)> {
    results
        .iter()
        .map(|r| (r.resource.clone(), r.valid))
        .collect()
}

// ── Fixture monorepo ──

#[test]
fn serverless_names_are_checked_in_discovery_order() {
    let registry = Registry::new().with(ServerlessSameName::new());
    let result = lint(fixture_root(), &registry).expect("lint should succeed");

    assert_eq!(
        result.results.len(),
        3,
        "expected 3 results, got {:#?}",
        result.results
    );
    let all: Vec<&RuleResult> = result.results.iter().collect();
    assert_eq!(
        summary(&all),
        vec![
            ("services/svc-a/serverless.yml".to_string(), true),
            ("services/svc-b/serverless.yml".to_string(), true),
            ("services/svc-c/serverless.yml".to_string(), false),
        ]
    );
    assert!(result.results.iter().all(|r| r.rule == "serverless-same-name"));

    let invalid = &result.results[2];
    assert_eq!(invalid.module.as_ref().unwrap().name, "svc-c");
    assert!(invalid.message.as_ref().unwrap().contains("billing-service"));
    assert_eq!(result.modules_checked, 3);
}

#[test]
fn builtin_registry_over_fixture() {
    let registry = builtin_registry();
    let result = lint(fixture_root(), &registry).expect("lint should succeed");

    assert_eq!(result.by_rule("serverless-same-name").len(), 3);
    assert_eq!(
        summary(&result.by_rule("packagejson-same-name")),
        vec![("services/svc-a/package.json".to_string(), true)]
    );
    // fixture pattern is ^svc-[a-z]+$
    assert!(result
        .by_rule("module-name-regex")
        .iter()
        .all(|r| r.valid));
    assert!(result.by_rule("module-required-files").is_empty());
    assert!(result.by_rule("root-required-files").is_empty());

    assert!(result.has_invalid());
    assert_eq!(result.invalid().len(), 1);
    assert!(!result
        .results
        .iter()
        .any(|r| r.resource.starts_with("legacy")));
}

#[test]
fn fixture_modules_and_their_rules() {
    let registry = builtin_registry();
    let linter = Linter::builder()
        .root(fixture_root())
        .build(&registry)
        .unwrap();
    let modules = linter.modules().unwrap();

    let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["svc-a", "svc-b", "svc-c"]);
    for module in &modules {
        assert!(module.is_rule_enabled("serverless-same-name"));
        assert!(!module.is_rule_enabled("module-required-files"));
    }
}

// ── Temp-dir scenarios ──

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn nested_configs_toggle_required_files() {
    let tmp = TempDir::new().unwrap();
    touch(
        tmp.path(),
        ".monolinter.json",
        r#"{ "rules": { "module-required-files": { "enabled": true, "files": ["README.md"] } } }"#,
    );
    touch(tmp.path(), "apps/web/package.json", r#"{ "name": "web" }"#);
    touch(tmp.path(), "apps/web/README.md", "# web");
    touch(tmp.path(), "apps/api/package.json", r#"{ "name": "api" }"#);
    touch(
        tmp.path(),
        "apps/api/.monolinter.json",
        r#"{ "rules": { "module-required-files": { "files": ["README.md", "openapi.yaml"] } } }"#,
    );
    touch(tmp.path(), "tools/gen/package.json", r#"{ "name": "gen" }"#);
    touch(
        tmp.path(),
        "tools/.monolinter.json",
        r#"{ "rules": { "module-required-files": false } }"#,
    );

    let result = lint(tmp.path(), &builtin_registry()).unwrap();

    assert_eq!(
        summary(&result.by_rule("module-required-files")),
        vec![
            ("apps/api/README.md".to_string(), false),
            ("apps/api/openapi.yaml".to_string(), false),
            ("apps/web/README.md".to_string(), true),
        ]
    );
    assert_eq!(result.by_rule("packagejson-same-name").len(), 3);
}

#[test]
fn root_required_files_run_once_without_modules() {
    let tmp = TempDir::new().unwrap();
    touch(
        tmp.path(),
        ".monolinter.json",
        r#"{ "rules": { "root-required-files": { "enabled": true, "files": ["README.md", "CODEOWNERS"] } } }"#,
    );
    touch(tmp.path(), "README.md", "# repo");

    let result = lint(tmp.path(), &builtin_registry()).unwrap();

    assert_eq!(result.modules_checked, 0);
    assert_eq!(
        summary(&result.by_rule("root-required-files")),
        vec![
            ("README.md".to_string(), true),
            ("CODEOWNERS".to_string(), false),
        ]
    );
    // every module rule is not applicable with no modules
    assert_eq!(result.results.len(), 2);
}

#[test]
fn broken_manifest_aborts_the_run() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "svc/orders/serverless.yml", "service: [oops\n");

    let err = lint(tmp.path(), &builtin_registry()).unwrap_err();
    assert!(err.to_string().contains("serverless-same-name"));
}
