//! Metadata loading for datalint (YAML/JSON formats).
//!
//! Parses table metadata files into the strongly-typed
//! [`TableMetadata`] structure and runs meta-schema checks on the result,
//! so that obviously broken contracts are rejected before any data is
//! touched.
//!
//! # Example
//!
//! ```rust
//! use datalint_config::parse_yaml;
//!
//! let yaml = r#"
//! name: people
//! data_format: csv
//! columns:
//!   - name: id
//!     nullable: false
//!   - name: age
//!     minimum: 0
//!     maximum: 120
//! "#;
//!
//! let metadata = parse_yaml(yaml).expect("failed to parse metadata");
//! assert_eq!(metadata.columns.len(), 2);
//! ```

use datalint_core::TableMetadata;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading metadata.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// YAML parsing or deserialization failed
    #[error("failed to parse YAML metadata: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing or deserialization failed
    #[error("failed to parse JSON metadata: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing file extension
    #[error("invalid or missing metadata file extension")]
    InvalidExtension,

    /// A column entry has an empty name
    #[error("metadata contains a column with an empty name")]
    EmptyColumnName,

    /// Two column entries share a name
    #[error("duplicate metadata entry for column '{0}'")]
    DuplicateColumn(String),

    /// A pattern does not compile
    #[error("pattern for column '{column}' does not compile: {error}")]
    BadPattern {
        /// Column carrying the pattern
        column: String,
        /// Compilation error from the regex engine
        error: String,
    },
}

/// Result type alias for metadata loading.
pub type Result<T> = std::result::Result<T, ConfigLoadError>;

/// Supported metadata file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// JSON format (.json)
    Json,
}

/// Parses table metadata from a YAML string.
pub fn parse_yaml(content: &str) -> Result<TableMetadata> {
    let metadata: TableMetadata = serde_yaml_ng::from_str(content)?;
    validate_metadata(&metadata)?;
    Ok(metadata)
}

/// Parses table metadata from a JSON string.
pub fn parse_json(content: &str) -> Result<TableMetadata> {
    let metadata: TableMetadata = serde_json::from_str(content)?;
    validate_metadata(&metadata)?;
    Ok(metadata)
}

/// Detects the metadata format from a file path based on its extension.
///
/// * `.yaml`, `.yml` → [`MetadataFormat::Yaml`]
/// * `.json` → [`MetadataFormat::Json`]
pub fn detect_format(path: &Path) -> Result<MetadataFormat> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("yaml") | Some("yml") => Ok(MetadataFormat::Yaml),
        Some("json") => Ok(MetadataFormat::Json),
        _ => Err(ConfigLoadError::InvalidExtension),
    }
}

/// Reads and parses a metadata file, detecting the format from the
/// extension.
pub fn parse_file(path: &Path) -> Result<TableMetadata> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    match format {
        MetadataFormat::Yaml => parse_yaml(&content),
        MetadataFormat::Json => parse_json(&content),
    }
}

/// Meta-schema checks on parsed metadata.
///
/// Column names must be non-empty and unique; patterns must compile.
/// Rule semantics (directive counts, bound modes) are checked by the
/// validation engine at evaluation time.
pub fn validate_metadata(metadata: &TableMetadata) -> Result<()> {
    let mut seen = HashSet::new();
    for column in &metadata.columns {
        if column.name.is_empty() {
            return Err(ConfigLoadError::EmptyColumnName);
        }
        if !seen.insert(column.name.as_str()) {
            return Err(ConfigLoadError::DuplicateColumn(column.name.clone()));
        }
        if let Some(pattern) = &column.pattern {
            Regex::new(pattern).map_err(|e| ConfigLoadError::BadPattern {
                column: column.name.clone(),
                error: e.to_string(),
            })?;
        }
    }
    Ok(())
}
