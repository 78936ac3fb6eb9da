//! Metadata types: the declarative per-column validation contract.
//!
//! Metadata is authored in YAML or JSON and deserialized into these typed
//! records. Absence of a key means "don't care": each optional field both
//! parameterizes a rule and, by being present, opts the column into it.

use crate::Value;
use serde::{Deserialize, Serialize};

/// Default parse format for `type: date` columns.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default parse format for `type: datetime` columns.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source data format tag for a table.
///
/// Consumed only by data-loading plumbing; the validation engine itself
/// never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Comma-separated values
    Csv,
    /// JSON records
    Json,
    /// Apache Parquet columnar format
    Parquet,
}

impl Default for DataFormat {
    fn default() -> Self {
        DataFormat::Csv
    }
}

/// The validation contract for one column.
///
/// Every rule-bearing field is optional; a rule only runs when its keys
/// are present (see the applicability gate in `datalint_validator`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name, must match a column in the table being validated
    pub name: String,

    /// Inclusive numeric lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Inclusive numeric upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Inclusive lower bound on string length
    #[serde(default, rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on string length
    #[serde(default, rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regular expression values must match in full
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Set of allowed values (exact, type-sensitive membership)
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,

    /// Whether nulls are allowed; absent means true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// Logical type tag (e.g. "string", "int", "date", "datetime")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,

    /// strftime-style parse format for date/datetime columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl ColumnMetadata {
    /// Creates metadata with only a name; all rules opt-out.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimum: None,
            maximum: None,
            min_length: None,
            max_length: None,
            pattern: None,
            allowed_values: None,
            nullable: None,
            column_type: None,
            date_format: None,
        }
    }

    /// Effective nullability: absent defaults to true.
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(true)
    }

    /// True when the declared type tag is `date`.
    pub fn is_date(&self) -> bool {
        self.column_type.as_deref() == Some("date")
    }

    /// True when the declared type tag is `datetime`.
    pub fn is_datetime(&self) -> bool {
        self.column_type.as_deref() == Some("datetime")
    }
}

/// The validation contract for a whole table: an ordered sequence of
/// column descriptors plus the source format tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Optional table name for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source format, used only by loaders
    #[serde(default)]
    pub data_format: DataFormat,

    /// Column contracts in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    /// Looks up the metadata entry for a column name.
    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_defaults_to_true() {
        let meta = ColumnMetadata::named("id");
        assert!(meta.is_nullable());

        let mut meta = ColumnMetadata::named("id");
        meta.nullable = Some(false);
        assert!(!meta.is_nullable());
    }

    #[test]
    fn test_type_tag_helpers() {
        let mut meta = ColumnMetadata::named("when");
        assert!(!meta.is_date() && !meta.is_datetime());

        meta.column_type = Some("date".into());
        assert!(meta.is_date());

        meta.column_type = Some("datetime".into());
        assert!(meta.is_datetime());

        meta.column_type = Some("string".into());
        assert!(!meta.is_date() && !meta.is_datetime());
    }

    #[test]
    fn test_metadata_json_field_names() {
        let json = r#"{
            "name": "score",
            "minLength": 1,
            "maxLength": 8,
            "enum": [1, "1"],
            "type": "string"
        }"#;

        let meta: ColumnMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.name, "score");
        assert_eq!(meta.min_length, Some(1));
        assert_eq!(meta.max_length, Some(8));
        assert_eq!(meta.column_type.as_deref(), Some("string"));
        assert_eq!(meta.allowed_values.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_data_format_default_is_csv() {
        let meta: TableMetadata = serde_json::from_str(r#"{"columns": []}"#).unwrap();
        assert_eq!(meta.data_format, DataFormat::Csv);
    }
}
