//! Table-level validation: the engine's entry point.

use crate::validate_column;
use datalint_core::{ConfigError, Result, Table, TableMetadata, TableResult};
use tracing::{debug, warn};

/// Validates a table against its metadata contract.
///
/// Each metadata entry whose name matches a table column is validated in
/// metadata order. Metadata naming a column the table lacks is a fatal
/// [`ConfigError::MissingColumn`] unless `ignore_missing_columns` is set,
/// in which case the entry is skipped with no corresponding result.
/// Table columns without a metadata entry pass through unvalidated.
///
/// Column evaluations are pure functions of `(column, metadata)` and the
/// result tree is assembled only after all of them complete, so callers
/// may shard the per-column work if they need to.
///
/// # Errors
///
/// Returns a [`ConfigError`] on malformed rule parameters or a hard
/// missing-column mismatch; no partial result is produced.
pub fn validate_table(
    table: &Table,
    metadata: &TableMetadata,
    ignore_missing_columns: bool,
) -> Result<TableResult> {
    let mut columns = Vec::with_capacity(metadata.columns.len());

    for meta in &metadata.columns {
        match table.column(&meta.name) {
            Some(column) => columns.push(validate_column(column, meta)?),
            None if ignore_missing_columns => {
                debug!(column = %meta.name, "metadata column not in table, skipping");
            }
            None => {
                return Err(ConfigError::MissingColumn {
                    column: meta.name.clone(),
                });
            }
        }
    }

    let result = TableResult::new(columns);
    if result.is_valid() {
        debug!(columns = result.columns.len(), "table passed validation");
    } else {
        warn!(
            failures = ?result.failing_column_names(),
            "table failed validation"
        );
        debug!(detail = %result.to_json(), "validation detail");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalint_core::{Column, ColumnMetadataBuilder, TableMetadataBuilder, Value};

    fn people_table() -> Table {
        Table::new(vec![
            Column::new("id", vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            Column::new("age", vec![Value::Int(25), Value::Int(-5), Value::Int(150)]),
        ])
    }

    #[test]
    fn test_missing_column_hard_mode() {
        let metadata = TableMetadataBuilder::new()
            .column(ColumnMetadataBuilder::new("height").minimum(0.0).build())
            .build();

        let err = validate_table(&people_table(), &metadata, false).unwrap_err();
        match err {
            ConfigError::MissingColumn { column } => assert_eq!(column, "height"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_soft_mode_skips_entry() {
        let metadata = TableMetadataBuilder::new()
            .column(ColumnMetadataBuilder::new("height").minimum(0.0).build())
            .column(ColumnMetadataBuilder::new("id").nullable(false).build())
            .build();

        let result = validate_table(&people_table(), &metadata, true).unwrap();
        assert!(result.is_valid());
        // No ColumnResult for the skipped entry
        assert_eq!(result.columns.len(), 1);
        assert_eq!(result.columns[0].column_name, "id");
    }

    #[test]
    fn test_unvalidated_table_columns_pass_through() {
        let metadata = TableMetadataBuilder::new()
            .column(ColumnMetadataBuilder::new("id").nullable(false).build())
            .build();

        let result = validate_table(&people_table(), &metadata, false).unwrap();
        assert!(result.is_valid());
        // "age" has no metadata entry and is never validated
        assert_eq!(result.columns.len(), 1);
    }

    #[test]
    fn test_results_follow_metadata_order() {
        let metadata = TableMetadataBuilder::new()
            .column(ColumnMetadataBuilder::new("age").minimum(0.0).build())
            .column(ColumnMetadataBuilder::new("id").nullable(false).build())
            .build();

        let result = validate_table(&people_table(), &metadata, false).unwrap();
        let names: Vec<_> = result.columns.iter().map(|c| c.column_name.as_str()).collect();
        assert_eq!(names, vec!["age", "id"]);
    }
}
