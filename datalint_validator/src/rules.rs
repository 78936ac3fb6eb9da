//! Rule evaluators.
//!
//! One pure function per rule kind. Each takes the full column plus its
//! metadata fragment and returns a [`RuleOutcome`] recording, for every
//! failing row, its zero-based index and raw value in ascending order.
//!
//! Data-level failures never raise. The only fallible paths are
//! configuration errors: a bounds rule with neither bound set, an invalid
//! regex, or a date format with the wrong directive count.
//!
//! Null handling: every value rule skips nulls. Only the nullable rule
//! fails them, so a null row is reported once, not by every active rule.

use chrono::{NaiveDate, NaiveDateTime};
use datalint_core::{
    Column, ConfigError, Result, RuleOutcome, Value, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT,
};
use regex::Regex;
use serde_json::json;

/// Checks numeric values against inclusive min/max bounds.
///
/// Three modes: min-only fails `v < min`, max-only fails `v > max`, both
/// fail values outside `[min, max]`. Non-numeric values cannot satisfy a
/// numeric bound and fail with evidence.
pub fn check_bounds(
    column: &Column,
    minimum: Option<f64>,
    maximum: Option<f64>,
) -> Result<RuleOutcome> {
    if minimum.is_none() && maximum.is_none() {
        // The gate prevents this call; reaching it is a config error.
        return Err(ConfigError::NoBoundSet {
            column: column.name.clone(),
            rule: "bounds".to_string(),
        });
    }

    let mut inputs = serde_json::Map::new();
    if let Some(min) = minimum {
        inputs.insert("minimum".to_string(), json!(min));
    }
    if let Some(max) = maximum {
        inputs.insert("maximum".to_string(), json!(max));
    }

    let out_of_bounds = |v: f64| {
        minimum.is_some_and(|min| v < min) || maximum.is_some_and(|max| v > max)
    };

    let mut failures = Vec::new();
    for (idx, value) in column.rows() {
        if value.is_null() {
            continue;
        }
        match value.as_f64() {
            Some(v) if out_of_bounds(v) => failures.push((idx, value.clone())),
            Some(_) => {}
            None => failures.push((idx, value.clone())),
        }
    }

    Ok(RuleOutcome::from_failures(
        "bounds",
        serde_json::Value::Object(inputs),
        failures,
    ))
}

/// Checks string lengths against inclusive min/max bounds.
///
/// Nulls and non-string values carry no length and are excluded; a null
/// that should not be there is the nullable rule's finding.
pub fn check_length_bounds(
    column: &Column,
    min_length: Option<usize>,
    max_length: Option<usize>,
) -> Result<RuleOutcome> {
    if min_length.is_none() && max_length.is_none() {
        return Err(ConfigError::NoBoundSet {
            column: column.name.clone(),
            rule: "length_bounds".to_string(),
        });
    }

    let mut inputs = serde_json::Map::new();
    if let Some(min) = min_length {
        inputs.insert("minLength".to_string(), json!(min));
    }
    if let Some(max) = max_length {
        inputs.insert("maxLength".to_string(), json!(max));
    }

    let out_of_bounds = |len: usize| {
        min_length.is_some_and(|min| len < min) || max_length.is_some_and(|max| len > max)
    };

    let mut failures = Vec::new();
    for (idx, value) in column.rows() {
        if let Some(s) = value.as_str() {
            if out_of_bounds(s.chars().count()) {
                failures.push((idx, value.clone()));
            }
        }
    }

    Ok(RuleOutcome::from_failures(
        "length_bounds",
        serde_json::Value::Object(inputs),
        failures,
    ))
}

/// Checks values against an anchored regex.
///
/// The pattern must match the value's string form in full; a substring
/// match fails. Numeric values are matched through their canonical string
/// rendering, so numeric columns can be pattern-checked.
pub fn check_pattern(column: &Column, pattern: &str) -> Result<RuleOutcome> {
    let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| ConfigError::InvalidPattern {
        column: column.name.clone(),
        error: e.to_string(),
    })?;

    let mut failures = Vec::new();
    for (idx, value) in column.rows() {
        if value.is_null() {
            continue;
        }
        if !regex.is_match(&value.to_string()) {
            failures.push((idx, value.clone()));
        }
    }

    Ok(RuleOutcome::from_failures(
        "pattern",
        json!({ "pattern": pattern }),
        failures,
    ))
}

/// Checks values for membership in an allowed-value set.
///
/// Membership is exact and type-sensitive: numeric `1` and string `"1"`
/// are distinct members unless the set author includes both.
pub fn check_enum(column: &Column, allowed: &[Value]) -> RuleOutcome {
    let mut failures = Vec::new();
    for (idx, value) in column.rows() {
        if value.is_null() {
            continue;
        }
        if !allowed.contains(value) {
            failures.push((idx, value.clone()));
        }
    }

    RuleOutcome::from_failures("enum", json!({ "enum": allowed }), failures)
}

/// Fails every null row. Only runs when the metadata requires non-null.
pub fn check_nullable(column: &Column) -> RuleOutcome {
    let mut failures = Vec::new();
    for (idx, value) in column.rows() {
        if value.is_null() {
            failures.push((idx, value.clone()));
        }
    }

    RuleOutcome::from_failures("nullable", json!({ "nullable": false }), failures)
}

/// Checks values parse as dates under a strftime format.
///
/// Defaults to `"%Y-%m-%d"`. The format must contain exactly 3 directives;
/// anything else is a fatal configuration error raised before any row is
/// evaluated.
pub fn check_date(column: &Column, date_format: Option<&str>) -> Result<RuleOutcome> {
    let format = date_format.unwrap_or(DEFAULT_DATE_FORMAT);
    let found = count_directives(format);
    if found != 3 {
        return Err(ConfigError::BadDateFormat {
            column: column.name.clone(),
            kind: "date",
            format: format.to_string(),
            found,
            expected: "exactly 3",
        });
    }

    let failures = collect_parse_failures(column, |s| {
        NaiveDate::parse_from_str(s, format).is_ok()
    });

    Ok(RuleOutcome::from_failures(
        "date",
        json!({ "type": "date", "date_format": format }),
        failures,
    ))
}

/// Checks values parse as datetimes under a strftime format.
///
/// Defaults to `"%Y-%m-%d %H:%M:%S"`. The format must contain between 6
/// and 9 directives inclusive.
pub fn check_datetime(column: &Column, date_format: Option<&str>) -> Result<RuleOutcome> {
    let format = date_format.unwrap_or(DEFAULT_DATETIME_FORMAT);
    let found = count_directives(format);
    if !(6..=9).contains(&found) {
        return Err(ConfigError::BadDateFormat {
            column: column.name.clone(),
            kind: "datetime",
            format: format.to_string(),
            found,
            expected: "between 6 and 9",
        });
    }

    let failures = collect_parse_failures(column, |s| {
        NaiveDateTime::parse_from_str(s, format).is_ok()
    });

    Ok(RuleOutcome::from_failures(
        "datetime",
        json!({ "type": "datetime", "date_format": format }),
        failures,
    ))
}

/// Rows whose string value does not parse. Non-string, non-null values
/// fail outright: they cannot conform to a text format.
fn collect_parse_failures(
    column: &Column,
    parses: impl Fn(&str) -> bool,
) -> Vec<(usize, Value)> {
    let mut failures = Vec::new();
    for (idx, value) in column.rows() {
        if value.is_null() {
            continue;
        }
        match value.as_str() {
            Some(s) if parses(s) => {}
            _ => failures.push((idx, value.clone())),
        }
    }
    failures
}

/// Counts strftime directives in a format string. A `%%` escape is a
/// literal percent sign, not a directive.
fn count_directives(format: &str) -> usize {
    let mut count = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('%') | None => {}
                Some(_) => count += 1,
            }
        }
    }
    count
}
