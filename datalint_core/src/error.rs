//! Error types for validation operations.
//!
//! Validation failures are never errors: they surface as `valid = false`
//! in the result tree. Errors here are configuration errors (malformed
//! rule parameters or metadata/table mismatches) which abort a validation
//! call with no partial result.

use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A fatal configuration error detected before or during evaluation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Metadata names a column the table does not have
    #[error("metadata column '{column}' not found in table")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A bounds rule reached evaluation with neither bound set
    #[error("rule '{rule}' for column '{column}' has neither a minimum nor a maximum")]
    NoBoundSet {
        /// Column the rule was configured for
        column: String,
        /// Which rule (bounds or length-bounds)
        rule: String,
    },

    /// A date/datetime format string has the wrong number of directives
    #[error(
        "{kind} format '{format}' for column '{column}' has {found} directive(s), expected {expected}"
    )]
    BadDateFormat {
        /// Column the rule was configured for
        column: String,
        /// "date" or "datetime"
        kind: &'static str,
        /// The offending format string
        format: String,
        /// Number of directives found
        found: usize,
        /// Human-readable expectation ("exactly 3", "between 6 and 9")
        expected: &'static str,
    },

    /// A pattern rule carries a regex that does not compile
    #[error("invalid pattern for column '{column}': {error}")]
    InvalidPattern {
        /// Column the rule was configured for
        column: String,
        /// Compilation error from the regex engine
        error: String,
    },
}
