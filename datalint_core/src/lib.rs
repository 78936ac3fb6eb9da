//! # Datalint Core
//!
//! Core data structures for the datalint data-quality engine.
//!
//! This crate provides the building blocks shared by the validation engine
//! and its collaborators:
//!
//! - **Table model**: typed columns of scalar values ([`Table`], [`Column`], [`Value`])
//! - **Metadata**: the declarative per-column contract ([`TableMetadata`], [`ColumnMetadata`])
//! - **Results**: the immutable outcome tree ([`TableResult`], [`ColumnResult`], [`RuleOutcome`])
//!
//! ## Example
//!
//! ```rust
//! use datalint_core::{ColumnMetadataBuilder, TableMetadataBuilder};
//!
//! let metadata = TableMetadataBuilder::new()
//!     .column(
//!         ColumnMetadataBuilder::new("age")
//!             .minimum(0.0)
//!             .maximum(120.0)
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(metadata.columns.len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod metadata;
pub mod result;
pub mod table;

pub use builder::*;
pub use error::*;
pub use metadata::*;
pub use result::*;
pub use table::*;
