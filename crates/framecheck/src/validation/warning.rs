//! The record produced for every validation failure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single difference between a schema and the table it was checked against.
///
/// Structural findings (wrong column count, missing column) carry no row;
/// cell-level findings carry the row, column and offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    column: Option<String>,
}

impl ValidationWarning {
    /// Create a warning that is not tied to any cell.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: None,
            row: None,
            column: None,
        }
    }

    /// Set the offending cell value.
    pub fn with_value(mut self, value: impl ToString) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Set the zero-based row index.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Set the column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending cell value, rendered as text.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Row index of the failing cell. `None` sorts ahead of every row.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// True when the warning describes table shape rather than a cell.
    pub fn is_structural(&self) -> bool {
        self.row.is_none()
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, &self.column, &self.value) {
            (Some(row), Some(column), Some(value)) => write!(
                f,
                "{{row: {}, column: \"{}\"}}: \"{}\" {}",
                row, column, value, self.message
            ),
            _ => f.write_str(&self.message),
        }
    }
}
