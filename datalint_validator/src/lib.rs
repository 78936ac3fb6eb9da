//! # Datalint Validator
//!
//! The column validation engine. Given a materialized
//! [`Table`](datalint_core::Table) and a
//! [`TableMetadata`](datalint_core::TableMetadata) contract, the engine
//! decides per column which rules apply (the applicability gate), evaluates
//! them in a fixed order, and returns an immutable [`TableResult`] with
//! row-level evidence for every failure.
//!
//! Rule evaluation is pure: each evaluator is a function of the column
//! data and its metadata fragment, and results are collected by value.
//! Data-level failures never raise; only malformed configuration aborts
//! a run, as a [`ConfigError`].
//!
//! ## Example
//!
//! ```rust
//! use datalint_core::{Column, ColumnMetadataBuilder, Table, TableMetadataBuilder};
//! use datalint_validator::validate_table;
//!
//! let table = Table::new(vec![Column::new(
//!     "age",
//!     vec![25i64.into(), (-5i64).into(), 150i64.into()],
//! )]);
//! let metadata = TableMetadataBuilder::new()
//!     .column(ColumnMetadataBuilder::new("age").minimum(0.0).maximum(120.0).build())
//!     .build();
//!
//! let result = validate_table(&table, &metadata, false).unwrap();
//! assert!(!result.is_valid());
//! assert_eq!(result.failing_column_names(), vec!["age"]);
//! ```

mod column;
mod gate;
mod rules;
mod table;

pub use column::*;
pub use gate::*;
pub use rules::*;
pub use table::*;

pub use datalint_core::{ColumnResult, ConfigError, Result, RuleOutcome, TableResult};
