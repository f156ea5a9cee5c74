use colored::*;
use indicators_core::{CategoricalRule, RuleError, StandardsConfig, Threshold};
use serde_json::json;

pub fn print_standards_report(config: &StandardsConfig, problems: &[RuleError], format: &str) {
    match format {
        "json" => print_json_report(config, problems),
        _ => print_text_report(config, problems),
    }
}

fn print_text_report(config: &StandardsConfig, problems: &[RuleError]) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  STANDARDS REPORT".bold());
    println!("{}", "═".repeat(60));

    if problems.is_empty() {
        print_success("Standards file is valid");
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Standards file has malformed rules".red().bold()
        );
    }

    if !config.numeric.is_empty() {
        println!("\n{}", "Numeric rules:".bold());
        for rule in &config.numeric {
            let flags = rule
                .comparison()
                .map(|c| c.label())
                .unwrap_or_else(|_| "?".to_string());
            println!(
                "  {} {} {}  (flags {})  {}",
                rule.column,
                rule.operator,
                threshold_text(&rule.threshold),
                flags,
                rule.description.dimmed()
            );
        }
    }

    if !config.categorical.is_empty() {
        println!("\n{}", "Categorical rules:".bold());
        for rule in &config.categorical {
            let allowed: Vec<String> = rule.allowed.iter().map(|v| v.to_string()).collect();
            println!(
                "  {} in [{}]  {}",
                rule.column,
                allowed.join(", "),
                rule.description.dimmed()
            );
        }
    }

    if !problems.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, problem) in problems.iter().enumerate() {
            println!("  {}. {}", i + 1, problem.to_string().red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Numeric rules:     {}", config.numeric.len());
    println!("  Categorical rules: {}", config.categorical.len());
    println!("  Total errors:      {}", problems.len());
    println!("{}", "═".repeat(60));
}

fn threshold_text(threshold: &Threshold) -> String {
    match threshold {
        Threshold::Value(v) => v.to_string(),
        Threshold::Bounds(bounds) => {
            let bounds: Vec<String> = bounds.iter().map(|b| b.to_string()).collect();
            format!("[{}]", bounds.join(", "))
        }
    }
}

fn print_json_report(config: &StandardsConfig, problems: &[RuleError]) {
    let numeric: Vec<_> = config
        .numeric
        .iter()
        .map(|rule| {
            json!({
                "column": rule.column,
                "op": rule.operator.as_str(),
                "threshold": rule.threshold,
                "rule": rule.comparison().map(|c| c.label()).ok(),
                "description": rule.description,
            })
        })
        .collect();
    let categorical: Vec<_> = config
        .categorical
        .iter()
        .map(|rule| {
            json!({
                "column": rule.column,
                "allowed": rule.allowed,
                "rule": CategoricalRule::LABEL,
                "description": rule.description,
            })
        })
        .collect();

    let output = json!({
        "valid": problems.is_empty(),
        "numeric": numeric,
        "categorical": categorical,
        "errors": problems.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        "summary": {
            "rule_count": config.len(),
            "error_count": problems.len(),
        }
    });

    match serde_json::to_string_pretty(&output) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => print_error(&format!("Failed to render JSON: {}", e)),
    }
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
