//! Data loading plumbing.
//!
//! Materializes a [`Table`] from a file, branching on the metadata's
//! `data_format` tag. The validation engine never touches I/O; everything
//! here happens before it is invoked.

use anyhow::{bail, Context, Result};
use datalint_core::{Column, DataFormat, Table, Value};
use std::path::Path;

/// Loads a data file into a table using the given format.
pub fn load_table(path: &Path, format: DataFormat) -> Result<Table> {
    match format {
        DataFormat::Csv => load_csv(path),
        DataFormat::Json => load_json(path),
        DataFormat::Parquet => bail!(
            "parquet data is not supported by the bundled loader; \
             materialize the table through another loader"
        ),
    }
}

/// Loads a headered CSV file column-wise.
///
/// Cell typing is inferred per value: empty cells are null, then integer,
/// then float, otherwise string.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open CSV file: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        for (i, cell) in record.iter().enumerate() {
            if i < columns.len() {
                columns[i].push(parse_cell(cell));
            }
        }
    }

    Ok(headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name, values))
        .collect())
}

/// Loads a JSON array of record objects column-wise.
///
/// Column order follows the first record; fields missing from a record
/// are null.
fn load_json(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read JSON file: {}", path.display()))?;
    let records: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&content).context("expected a JSON array of record objects")?;

    let Some(first) = records.first() else {
        return Ok(Table::empty());
    };
    let names: Vec<String> = first.keys().cloned().collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(records.len()); names.len()];
    for record in &records {
        for (i, name) in names.iter().enumerate() {
            let value = match record.get(name) {
                Some(v) => convert_json_value(name, v)?,
                None => Value::Null,
            };
            columns[i].push(value);
        }
    }

    Ok(names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name, values))
        .collect())
}

fn convert_json_value(column: &str, value: &serde_json::Value) -> Result<Value> {
    Ok(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                bail!("unrepresentable number in column '{column}': {n}")
            }
        }
        serde_json::Value::String(s) => Value::Str(s.clone()),
        other => bail!(
            "nested value in column '{column}' is not a scalar: {other}"
        ),
    })
}

fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = cell.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Str(cell.to_string())
}
