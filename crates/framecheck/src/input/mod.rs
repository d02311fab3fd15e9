//! Input parsing and the table abstraction validated by schemas.

mod parser;
mod source;
mod table;

pub use parser::{Parser, ParserConfig, parse_delimiter};
pub use source::{DataTable, SourceMetadata};
pub use table::{Series, Table};
