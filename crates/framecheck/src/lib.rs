//! Framecheck: schema-driven validation for tabular datasets.
//!
//! A [`Schema`] is an ordered list of [`Column`]s plus a pairing mode. It pairs
//! its columns with a table's columns, by header name or by position, hands
//! each column its values and collects the resulting [`ValidationWarning`]s,
//! sorted by row.
//!
//! # Principles
//!
//! - **Fail fast on structure**: a wrong column count or a missing column
//!   yields a single warning and stops.
//! - **Fail soft on content**: once paired, every column is checked.
//! - **Non-destructive**: tables are only read.
//!
//! # Example
//!
//! ```
//! use framecheck::{Column, ColumnSpec, DataTable, Schema};
//! use framecheck::validation::{InRange, LeadingWhitespace};
//!
//! let columns: Vec<Box<dyn Column>> = vec![
//!     Box::new(ColumnSpec::new("name").with_validation(LeadingWhitespace)),
//!     Box::new(ColumnSpec::new("age").with_validation(InRange::new(Some(0.0), Some(120.0)))),
//! ];
//! let schema = Schema::new(columns, false).unwrap();
//!
//! let table = DataTable::from_rows(&["name", "age"], &[&[" Ann", "30"], &["Bob", "130"]]);
//! let warnings = schema.validate(&table, None).unwrap();
//!
//! assert_eq!(warnings.len(), 2);
//! assert_eq!(
//!     warnings[0].to_string(),
//!     "{row: 0, column: \"name\"}: \" Ann\" contains leading whitespace"
//! );
//! ```

pub mod error;
pub mod input;
pub mod schema;
pub mod validation;

mod framecheck;

pub use crate::framecheck::{Framecheck, FramecheckConfig, ReportSummary, ValidationReport};
pub use error::{FramecheckError, Result};
pub use input::{DataTable, Parser, ParserConfig, Series, SourceMetadata, Table};
pub use schema::{Column, ColumnSpec, RuleDefinition, Schema, SchemaDefinition, SchemaOutcome};
pub use validation::{Validation, ValidationWarning};
