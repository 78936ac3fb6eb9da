//! Builder pattern for constructing metadata.
//!
//! Fluent builders for [`ColumnMetadata`] and [`TableMetadata`], mainly
//! used by tests and programmatic callers; file-based metadata goes
//! through `datalint_config` instead.

use crate::{ColumnMetadata, DataFormat, TableMetadata, Value};

/// Builder for creating a `ColumnMetadata`.
///
/// # Example
///
/// ```rust
/// use datalint_core::ColumnMetadataBuilder;
///
/// let meta = ColumnMetadataBuilder::new("age")
///     .minimum(0.0)
///     .maximum(120.0)
///     .nullable(false)
///     .build();
///
/// assert_eq!(meta.minimum, Some(0.0));
/// assert!(!meta.is_nullable());
/// ```
#[derive(Debug)]
pub struct ColumnMetadataBuilder {
    meta: ColumnMetadata,
}

impl ColumnMetadataBuilder {
    /// Creates a builder for a column with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: ColumnMetadata::named(name),
        }
    }

    /// Sets the inclusive numeric lower bound.
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.meta.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive numeric upper bound.
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.meta.maximum = Some(maximum);
        self
    }

    /// Sets the inclusive lower bound on string length.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.meta.min_length = Some(min_length);
        self
    }

    /// Sets the inclusive upper bound on string length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.meta.max_length = Some(max_length);
        self
    }

    /// Sets the regex values must match in full.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.meta.pattern = Some(pattern.into());
        self
    }

    /// Sets the allowed-value set.
    pub fn allowed_values(mut self, values: Vec<Value>) -> Self {
        self.meta.allowed_values = Some(values);
        self
    }

    /// Sets nullability explicitly.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.meta.nullable = Some(nullable);
        self
    }

    /// Sets the logical type tag.
    pub fn column_type(mut self, column_type: impl Into<String>) -> Self {
        self.meta.column_type = Some(column_type.into());
        self
    }

    /// Sets the strftime parse format for date/datetime columns.
    pub fn date_format(mut self, date_format: impl Into<String>) -> Self {
        self.meta.date_format = Some(date_format.into());
        self
    }

    /// Builds the column metadata.
    pub fn build(self) -> ColumnMetadata {
        self.meta
    }
}

/// Builder for creating a `TableMetadata`.
#[derive(Debug, Default)]
pub struct TableMetadataBuilder {
    meta: TableMetadata,
}

impl TableMetadataBuilder {
    /// Creates an empty table metadata builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    /// Sets the source data format tag.
    pub fn data_format(mut self, format: DataFormat) -> Self {
        self.meta.data_format = format;
        self
    }

    /// Appends a column contract.
    pub fn column(mut self, column: ColumnMetadata) -> Self {
        self.meta.columns.push(column);
        self
    }

    /// Appends multiple column contracts.
    pub fn columns(mut self, columns: Vec<ColumnMetadata>) -> Self {
        self.meta.columns.extend(columns);
        self
    }

    /// Builds the table metadata.
    pub fn build(self) -> TableMetadata {
        self.meta
    }
}
