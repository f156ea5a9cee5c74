mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "indicators")]
#[command(version, about = "Humanitarian indicator standards CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rules of a built-in standard
    Show {
        /// Standard name: sphere, ipc
        standard: String,

        /// Output format: yaml, json
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Check a custom standards file without validating data
    Check {
        /// Path to the standards file (YAML, TOML or JSON)
        rules: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Show { standard, format } => commands::show::execute(&standard, &format),
        Commands::Check { rules, format } => commands::check::execute(&rules, &format),
    }
}
