//! Column contract and the standard rule-based column.

use std::fmt;

use crate::input::{DataTable, Series};
use crate::validation::{Validation, ValidationWarning};

/// A named unit owning the validation rules for one table column.
pub trait Column: Send + Sync {
    /// Name used to pair this column with a table header.
    fn name(&self) -> &str;

    /// Check the paired column's values. Warnings may come back in any row order.
    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning>;
}

/// A column checked by an ordered list of [`Validation`] rules.
pub struct ColumnSpec {
    name: String,
    validations: Vec<Box<dyn Validation>>,
    allow_empty: bool,
}

impl ColumnSpec {
    /// Create a column with no rules; every value passes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validations: Vec::new(),
            allow_empty: false,
        }
    }

    /// Append a rule.
    pub fn with_validation(mut self, validation: impl Validation + 'static) -> Self {
        self.validations.push(Box::new(validation));
        self
    }

    /// Append an already boxed rule.
    pub fn with_boxed_validation(mut self, validation: Box<dyn Validation>) -> Self {
        self.validations.push(validation);
        self
    }

    /// Skip null-like cells (see [`DataTable::is_null_value`]) in every rule.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Whether null-like cells are skipped.
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// Number of rules attached.
    pub fn validation_count(&self) -> usize {
        self.validations.len()
    }
}

impl Column for ColumnSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for validation in &self.validations {
            let found = validation.validate(series);
            if self.allow_empty {
                warnings.extend(found.into_iter().filter(|w| {
                    !w.row()
                        .and_then(|row| series.get(row))
                        .is_some_and(DataTable::is_null_value)
                }));
            } else {
                warnings.extend(found);
            }
        }

        warnings
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field(
                "validations",
                &self.validations.iter().map(|v| v.message()).collect::<Vec<_>>(),
            )
            .field("allow_empty", &self.allow_empty)
            .finish()
    }
}
