mod commands;
mod loader;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datalint")]
#[command(version, about = "Tabular data-quality linter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a data file against a metadata contract
    Validate {
        /// Path to the metadata file (YAML or JSON)
        metadata: String,

        /// Path to the data file (format taken from the metadata)
        data: String,

        /// Skip metadata entries naming columns absent from the data
        #[arg(long)]
        ignore_missing_columns: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a metadata file without validating data
    Check {
        /// Path to the metadata file (YAML or JSON)
        metadata: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
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
        Commands::Validate {
            metadata,
            data,
            ignore_missing_columns,
            format,
        } => commands::validate::execute(&metadata, &data, ignore_missing_columns, &format),

        Commands::Check { metadata } => commands::check::execute(&metadata),
    }
}
