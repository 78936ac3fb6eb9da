use anyhow::{Context, Result};
use datalint_config::parse_file;
use datalint_validator::validate_table;
use std::path::Path;
use tracing::info;

use crate::{loader, output};

pub fn execute(
    metadata_path: &str,
    data_path: &str,
    ignore_missing_columns: bool,
    format: &str,
) -> Result<()> {
    info!("Validating {} against {}", data_path, metadata_path);

    let metadata = parse_file(Path::new(metadata_path))
        .with_context(|| format!("failed to parse metadata file: {metadata_path}"))?;

    output::print_info(&format!(
        "Metadata loaded: {} ({} column contract(s), {:?} data)",
        metadata.name.as_deref().unwrap_or(metadata_path),
        metadata.columns.len(),
        metadata.data_format,
    ));

    let table = loader::load_table(Path::new(data_path), metadata.data_format)
        .with_context(|| format!("failed to load data file: {data_path}"))?;

    output::print_info(&format!(
        "Table loaded: {} column(s)",
        table.width()
    ));

    let result = validate_table(&table, &metadata, ignore_missing_columns)
        .context("validation aborted")?;

    output::print_table_result(&result, format);

    if !result.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}
