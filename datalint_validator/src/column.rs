//! Column-level validation.
//!
//! Runs the applicability gate for each rule kind against one column's
//! metadata and dispatches to the evaluators, collecting outcomes into a
//! [`ColumnResult`].

use crate::{rules, RuleKind, EVALUATION_ORDER};
use datalint_core::{Column, ColumnMetadata, ColumnResult, Result};
use tracing::debug;

/// Validates one column against its metadata.
///
/// Only applicable rules run and contribute outcomes; a column whose
/// metadata activates nothing yields an empty, valid result.
pub fn validate_column(column: &Column, meta: &ColumnMetadata) -> Result<ColumnResult> {
    let mut tests = Vec::new();

    for kind in EVALUATION_ORDER {
        if !kind.is_applicable(meta) {
            continue;
        }

        let outcome = match kind {
            RuleKind::Bounds => rules::check_bounds(column, meta.minimum, meta.maximum)?,
            RuleKind::LengthBounds => {
                rules::check_length_bounds(column, meta.min_length, meta.max_length)?
            }
            RuleKind::Pattern => match &meta.pattern {
                Some(pattern) => rules::check_pattern(column, pattern)?,
                None => continue,
            },
            RuleKind::Enum => match &meta.allowed_values {
                Some(allowed) => rules::check_enum(column, allowed),
                None => continue,
            },
            RuleKind::Nullable => rules::check_nullable(column),
            RuleKind::Datetime => rules::check_datetime(column, meta.date_format.as_deref())?,
            RuleKind::Date => rules::check_date(column, meta.date_format.as_deref())?,
        };

        debug!(
            column = %column.name,
            rule = %outcome.rule_name,
            valid = outcome.valid,
            failing_rows = outcome.unexpected_row_indices.len(),
            "rule evaluated"
        );
        tests.push(outcome);
    }

    Ok(ColumnResult::new(meta.name.as_str(), tests))
}
