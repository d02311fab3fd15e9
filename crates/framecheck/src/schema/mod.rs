//! Schema definition, column contracts and table pairing.

mod column;
mod definition;
mod table;
mod types;

pub use column::{Column, ColumnSpec};
pub use definition::{ColumnDefinition, SchemaDefinition};
pub use table::{Schema, SchemaOutcome};
pub use types::RuleDefinition;
