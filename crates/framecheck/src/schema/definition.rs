//! Loading schemas from JSON definitions.
//!
//! ```json
//! {
//!   "ordered": false,
//!   "columns": [
//!     { "name": "age", "allow_empty": true,
//!       "validations": [ { "type": "can_convert", "to": "integer" } ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::column::{Column, ColumnSpec};
use super::table::Schema;
use super::types::RuleDefinition;
use crate::error::{FramecheckError, Result};

/// One column entry of a schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    /// Skip null-like cells in every rule.
    #[serde(default)]
    pub allow_empty: bool,
    #[serde(default)]
    pub validations: Vec<RuleDefinition>,
}

impl ColumnDefinition {
    /// Compile into a [`ColumnSpec`].
    pub fn build(&self) -> Result<ColumnSpec> {
        let mut column = ColumnSpec::new(&self.name).allow_empty(self.allow_empty);
        for rule in &self.validations {
            column = column.with_boxed_validation(rule.build()?);
        }
        Ok(column)
    }
}

/// A whole schema file.
///
/// Deserializing goes through the same shape checks as
/// [`SchemaDefinition::from_json_str`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct SchemaDefinition {
    pub columns: Vec<ColumnDefinition>,
    /// Pair columns by position instead of by name.
    #[serde(default)]
    pub ordered: bool,
}

impl SchemaDefinition {
    /// Parse a definition, rejecting malformed shapes before field decoding.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Read and parse a definition file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FramecheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading schema definition");
        Self::from_json_str(&text)
    }

    fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(invalid("A schema definition must be a JSON object"));
        };

        let ordered = match root.remove("ordered") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => flag,
            Some(_) => return Err(invalid("The ordered field must be a boolean")),
        };

        let entries = match root.remove("columns") {
            None | Some(Value::Null) => {
                return Err(invalid("A schema must have a columns list"));
            }
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(invalid("The columns field must be a list of column definitions"));
            }
        };

        if entries.is_empty() {
            return Err(invalid("A schema must have at least one column"));
        }

        let columns = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::from_value::<ColumnDefinition>(entry)
                    .map_err(|e| invalid(&format!("Column {} is malformed: {}", i, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns, ordered })
    }

    /// Compile into a [`Schema`].
    pub fn build(&self) -> Result<Schema> {
        let columns = self
            .columns
            .iter()
            .map(|c| c.build().map(|spec| Box::new(spec) as Box<dyn Column>))
            .collect::<Result<Vec<_>>>()?;
        Schema::new(columns, self.ordered)
    }
}

impl TryFrom<Value> for SchemaDefinition {
    type Error = FramecheckError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn invalid(message: &str) -> FramecheckError {
    FramecheckError::InvalidSchema(message.to_string())
}
