//! List rules command implementation.

use monolinter_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<25} {:<8} {:<8} Description", "Name", "Scope", "Default");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        let default = if rule.enabled_by_default() { "on" } else { "off" };
        println!(
            "{:<25} {:<8} {:<8} {}",
            rule.name(),
            rule.scope().to_string(),
            default,
            rule.description()
        );
    }

    println!("\nEnable or disable rules per directory in .monolinter.json, e.g.:");
    println!(r#"  {{ "rules": {{ "module-required-files": {{ "enabled": true, "files": ["README.md"] }} }} }}"#);
    println!("\nUse --rules to run a subset, e.g.:");
    println!("  monolinter check --rules serverless-same-name,packagejson-same-name");
}
