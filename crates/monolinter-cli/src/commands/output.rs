//! Shared output formatting for lint results.

use anyhow::Result;
use monolinter_core::LintResult;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (valid, invalid) = result.count_by_validity();

    for r in &result.results {
        let status = if r.valid {
            "\x1b[32mok\x1b[0m"
        } else {
            "\x1b[31minvalid\x1b[0m"
        };

        match &r.module {
            Some(module) => println!("{} {} ({})", r.rule, r.resource, module.name),
            None => println!("{} {}", r.rule, r.resource),
        }
        match &r.message {
            Some(message) => println!("  {status}: {message}"),
            None => println!("  {status}"),
        }
        println!();
    }

    let summary_color = if invalid > 0 { "\x1b[31m" } else { "\x1b[32m" };

    println!(
        "{}Found {} invalid, {} valid result(s) in {} module(s)\x1b[0m",
        summary_color, invalid, valid, result.modules_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for r in &result.results {
        println!("{r}");
    }
}
