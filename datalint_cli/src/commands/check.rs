use anyhow::{Context, Result};
use datalint_config::parse_file;
use datalint_validator::{RuleKind, EVALUATION_ORDER};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(metadata_path: &str) -> Result<()> {
    info!("Checking metadata: {}", metadata_path);

    let metadata = parse_file(Path::new(metadata_path))
        .with_context(|| format!("failed to parse metadata file: {metadata_path}"))?;

    output::print_success("Metadata is well-formed");

    println!("\nMetadata Summary:");
    println!(
        "  Name:        {}",
        metadata.name.as_deref().unwrap_or("N/A")
    );
    println!("  Data format: {:?}", metadata.data_format);
    println!("  Columns:     {}", metadata.columns.len());

    for column in &metadata.columns {
        let active: Vec<&str> = EVALUATION_ORDER
            .iter()
            .filter(|k| k.is_applicable(column))
            .map(RuleKind::name)
            .collect();
        if active.is_empty() {
            println!("    {} (no active rules)", column.name);
        } else {
            println!("    {} [{}]", column.name, active.join(", "));
        }
    }

    Ok(())
}
