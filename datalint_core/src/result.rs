//! The validation result tree.
//!
//! Results are built bottom-up during a validation run and never mutated
//! afterwards: each [`RuleOutcome`] is frozen at construction, a
//! [`ColumnResult`] computes its own validity from its outcomes, and the
//! [`TableResult`] aggregates across columns. Callers receive read-only
//! views, so concurrent readers need no synchronization.

use crate::Value;
use serde::Serialize;

/// The result of one rule applied to one column.
///
/// Invariant: `unexpected_row_indices` and `unexpected_values` are parallel
/// sequences in ascending row order, and are empty exactly when `valid` is
/// true. The constructors uphold this; fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOutcome {
    /// Name of the rule that ran
    pub rule_name: String,

    /// The metadata fragment that parameterized the test, for diagnostics
    pub test_inputs: serde_json::Value,

    /// Whether every row passed
    pub valid: bool,

    /// Row indices of offending rows, ascending
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unexpected_row_indices: Vec<usize>,

    /// Raw values of offending rows, parallel to the indices
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unexpected_values: Vec<Value>,
}

impl RuleOutcome {
    /// Builds an outcome from the evidence collected by an evaluator.
    ///
    /// An empty failure list means the rule passed.
    pub fn from_failures(
        rule_name: impl Into<String>,
        test_inputs: serde_json::Value,
        failures: Vec<(usize, Value)>,
    ) -> Self {
        let (unexpected_row_indices, unexpected_values): (Vec<usize>, Vec<Value>) =
            failures.into_iter().unzip();
        Self {
            rule_name: rule_name.into(),
            test_inputs,
            valid: unexpected_row_indices.is_empty(),
            unexpected_row_indices,
            unexpected_values,
        }
    }
}

/// All outcomes for one column, in evaluation order.
///
/// Only rules that were applicable appear; a column with no applicable
/// rules is vacuously valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnResult {
    /// Name of the validated column
    pub column_name: String,

    /// Whether every outcome passed (true if none)
    pub valid: bool,

    /// Outcomes of the applicable rules
    pub tests: Vec<RuleOutcome>,
}

impl ColumnResult {
    /// Assembles a column result, deriving validity from the outcomes.
    pub fn new(column_name: impl Into<String>, tests: Vec<RuleOutcome>) -> Self {
        Self {
            column_name: column_name.into(),
            valid: tests.iter().all(|t| t.valid),
            tests,
        }
    }

    /// Outcomes that failed, in evaluation order.
    pub fn failed_tests(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.tests.iter().filter(|t| !t.valid)
    }
}

/// The result of validating a whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableResult {
    /// Whether every column passed
    pub valid: bool,

    /// Per-column results, in metadata order
    pub columns: Vec<ColumnResult>,
}

impl TableResult {
    /// Aggregates column results into a table result.
    pub fn new(columns: Vec<ColumnResult>) -> Self {
        Self {
            valid: columns.iter().all(|c| c.valid),
            columns,
        }
    }

    /// Whether the table passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Names of columns that failed, for one-line log summaries.
    pub fn failing_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !c.valid)
            .map(|c| c.column_name.as_str())
            .collect()
    }

    /// Full diagnostic detail as a JSON value, for verbose logging.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_outcome_from_empty_failures_is_valid() {
        let outcome = RuleOutcome::from_failures("bounds", json!({"minimum": 0.0}), vec![]);
        assert!(outcome.valid);
        assert!(outcome.unexpected_row_indices.is_empty());
        assert!(outcome.unexpected_values.is_empty());
    }

    #[test]
    fn test_outcome_evidence_is_parallel() {
        let outcome = RuleOutcome::from_failures(
            "bounds",
            json!({"minimum": 0.0, "maximum": 120.0}),
            vec![(1, Value::Int(-5)), (2, Value::Int(150))],
        );
        assert!(!outcome.valid);
        assert_eq!(outcome.unexpected_row_indices, vec![1, 2]);
        assert_eq!(
            outcome.unexpected_values,
            vec![Value::Int(-5), Value::Int(150)]
        );
    }

    #[test]
    fn test_column_result_validity() {
        let pass = RuleOutcome::from_failures("pattern", json!({}), vec![]);
        let fail = RuleOutcome::from_failures("enum", json!({}), vec![(0, Value::Null)]);

        let result = ColumnResult::new("status", vec![pass.clone()]);
        assert!(result.valid);

        let result = ColumnResult::new("status", vec![pass, fail]);
        assert!(!result.valid);
        assert_eq!(result.failed_tests().count(), 1);

        // No applicable rules: vacuously valid
        let result = ColumnResult::new("status", vec![]);
        assert!(result.valid);
    }

    #[test]
    fn test_table_result_queries() {
        let bad = ColumnResult::new(
            "age",
            vec![RuleOutcome::from_failures(
                "bounds",
                json!({}),
                vec![(0, Value::Int(-1))],
            )],
        );
        let good = ColumnResult::new("id", vec![]);

        let result = TableResult::new(vec![good, bad]);
        assert!(!result.is_valid());
        assert_eq!(result.failing_column_names(), vec!["age"]);

        let empty = TableResult::new(vec![]);
        assert!(empty.is_valid());
        assert!(empty.failing_column_names().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let result = TableResult::new(vec![ColumnResult::new(
            "age",
            vec![RuleOutcome::from_failures(
                "bounds",
                json!({"minimum": 0.0}),
                vec![(1, Value::Int(-5))],
            )],
        )]);

        let dump = result.to_json();
        assert_eq!(dump["valid"], json!(false));
        assert_eq!(dump["columns"][0]["column_name"], json!("age"));
        assert_eq!(
            dump["columns"][0]["tests"][0]["unexpected_row_indices"],
            json!([1])
        );
    }
}
