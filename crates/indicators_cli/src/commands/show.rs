use anyhow::{Context, Result, anyhow};
use indicators_core::Standard;
use tracing::info;

pub fn execute(name: &str, format: &str) -> Result<()> {
    let standard: Standard = name
        .parse()
        .with_context(|| format!("Cannot show standard '{}'", name))?;
    let config = standard.config();

    info!(
        "Standard {} has {} numeric and {} categorical rule(s)",
        standard,
        config.numeric.len(),
        config.categorical.len()
    );

    let rendered = match format {
        "yaml" => serde_yaml_ng::to_string(&config).context("Failed to render YAML")?,
        "json" => serde_json::to_string_pretty(&config).context("Failed to render JSON")?,
        other => return Err(anyhow!("Unsupported output format: {}", other)),
    };
    println!("{}", rendered);

    Ok(())
}
