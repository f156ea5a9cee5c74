use anyhow::{Context, Result};
use indicators_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(rules_path: &str, format: &str) -> Result<()> {
    info!("Checking standards file: {}", rules_path);

    let path = Path::new(rules_path);
    let config = parse_file(path)
        .with_context(|| format!("Failed to parse standards file: {}", rules_path))?;

    let problems = config.check();
    output::print_standards_report(&config, &problems, format);

    if !problems.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
