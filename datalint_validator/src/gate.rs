//! The rule applicability gate.
//!
//! Config authors opt into checks implicitly by supplying the relevant
//! metadata keys; absence of a key means "don't care", not "must pass".
//! A rule whose activation condition is not met is skipped entirely and
//! contributes no outcome.

use datalint_core::ColumnMetadata;

/// The seven rule kinds the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Numeric min/max bounds
    Bounds,
    /// Min/max bounds on string length
    LengthBounds,
    /// Anchored regex match
    Pattern,
    /// Allowed-value set membership
    Enum,
    /// Non-null enforcement
    Nullable,
    /// Datetime format conformance
    Datetime,
    /// Date format conformance
    Date,
}

/// Fixed evaluation order. Outcomes are independent, so the order does not
/// affect correctness, but it must be deterministic for stable diagnostics.
pub const EVALUATION_ORDER: [RuleKind; 7] = [
    RuleKind::Bounds,
    RuleKind::LengthBounds,
    RuleKind::Pattern,
    RuleKind::Enum,
    RuleKind::Nullable,
    RuleKind::Datetime,
    RuleKind::Date,
];

impl RuleKind {
    /// The rule name used in outcomes and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Bounds => "bounds",
            RuleKind::LengthBounds => "length_bounds",
            RuleKind::Pattern => "pattern",
            RuleKind::Enum => "enum",
            RuleKind::Nullable => "nullable",
            RuleKind::Datetime => "datetime",
            RuleKind::Date => "date",
        }
    }

    /// Whether this rule should run for a column with the given metadata.
    ///
    /// The nullable rule only runs to enforce non-null: `nullable` absent
    /// or `true` deactivates it.
    pub fn is_applicable(&self, meta: &ColumnMetadata) -> bool {
        match self {
            RuleKind::Bounds => meta.minimum.is_some() || meta.maximum.is_some(),
            RuleKind::LengthBounds => meta.min_length.is_some() || meta.max_length.is_some(),
            RuleKind::Pattern => meta.pattern.is_some(),
            RuleKind::Enum => meta.allowed_values.is_some(),
            RuleKind::Nullable => meta.nullable == Some(false),
            RuleKind::Datetime => meta.is_datetime(),
            RuleKind::Date => meta.is_date(),
        }
    }
}
