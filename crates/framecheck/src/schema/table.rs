//! Table-level schema: pairs declared columns with a table and runs them.

use std::fmt;

use tracing::{debug, warn};

use super::column::Column;
use crate::error::{FramecheckError, Result};
use crate::input::{Series, Table};
use crate::validation::ValidationWarning;

/// An ordered set of column specifications plus a pairing mode.
///
/// With `ordered` unset, schema columns are paired with table columns by
/// header name. With `ordered` set, the i-th schema column is paired with the
/// i-th table column and names are ignored.
///
/// A schema is immutable once built and can be shared across threads and
/// reused for any number of [`Schema::validate`] calls.
pub struct Schema {
    columns: Vec<Box<dyn Column>>,
    ordered: bool,
}

/// Warnings from one validation run and how the run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaOutcome {
    /// Warnings sorted by row.
    pub warnings: Vec<ValidationWarning>,
    /// The table's shape did not fit and no column was checked.
    pub structural: bool,
}

impl SchemaOutcome {
    fn structural(warning: ValidationWarning) -> Self {
        Self {
            warnings: vec![warning],
            structural: true,
        }
    }
}

/// A schema column matched with the table series it will check.
type Pair<'t, 's> = (Series<'t>, &'s dyn Column);

impl Schema {
    /// Create a schema. Fails if `columns` is empty.
    pub fn new(columns: Vec<Box<dyn Column>>, ordered: bool) -> Result<Self> {
        if columns.is_empty() {
            return Err(FramecheckError::InvalidSchema(
                "A schema must have at least one column".to_string(),
            ));
        }

        Ok(Self { columns, ordered })
    }

    /// Whether columns are paired by position.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Declared column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Validate a table and return every warning, sorted by row.
    ///
    /// `subset` restricts validation to the named schema columns and skips
    /// the column-count check. Naming a column the schema does not declare is
    /// an [`FramecheckError::Argument`] error.
    ///
    /// Shape problems (column count, a missing or ambiguous column) stop
    /// validation and come back as a single warning with no row. Once columns
    /// are paired, every column is checked regardless of what the others
    /// report. Warnings without a row sort first; ties keep emission order.
    pub fn validate<T>(&self, table: &T, subset: Option<&[&str]>) -> Result<Vec<ValidationWarning>>
    where
        T: Table + ?Sized,
    {
        self.validate_outcome(table, subset).map(|outcome| outcome.warnings)
    }

    /// Like [`Schema::validate`], but also reports whether pairing stopped on
    /// the table's shape before any column was checked.
    pub fn validate_outcome<T>(&self, table: &T, subset: Option<&[&str]>) -> Result<SchemaOutcome>
    where
        T: Table + ?Sized,
    {
        let working = match subset {
            None => {
                let expected = self.columns.len();
                let actual = table.column_count();
                if expected != actual {
                    warn!(expected, actual, "column count mismatch");
                    return Ok(SchemaOutcome::structural(ValidationWarning::new(format!(
                        "Invalid number of columns. The schema specifies {}, but the table has {}",
                        expected, actual
                    ))));
                }
                self.indexed_columns().collect::<Vec<_>>()
            }
            Some(subset) => {
                self.check_subset(subset)?;
                self.indexed_columns()
                    .filter(|(_, c)| subset.contains(&c.name()))
                    .collect()
            }
        };

        let pairs = if self.ordered {
            pair_by_position(table, &working)
        } else {
            pair_by_name(table, &working)
        };

        let pairs = match pairs {
            Ok(pairs) => pairs,
            Err(warning) => {
                warn!(column = warning.column(), "{}", warning.message());
                return Ok(SchemaOutcome::structural(warning));
            }
        };

        let mut warnings = Vec::new();
        for (series, column) in &pairs {
            let found = column.validate(series);
            debug!(column = column.name(), series = series.name(), warnings = found.len(), "column validated");
            warnings.extend(found);
        }

        // Stable, so equal rows keep the order columns emitted them
        warnings.sort_by_key(|w| w.row());

        Ok(SchemaOutcome {
            warnings,
            structural: false,
        })
    }

    fn indexed_columns(&self) -> impl Iterator<Item = (usize, &(dyn Column + 'static))> {
        self.columns.iter().map(|c| &**c).enumerate()
    }

    fn check_subset(&self, subset: &[&str]) -> Result<()> {
        let names = self.column_names();
        let mut unknown: Vec<&str> = Vec::new();
        for name in subset {
            if !names.contains(name) && !unknown.contains(name) {
                unknown.push(*name);
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(FramecheckError::Argument(format!(
                "Columns {:?} passed in are not part of the schema",
                unknown
            )))
        }
    }
}

/// Pair each working column with the table column at the same position.
///
/// Table columns past the end of the schema are ignored.
fn pair_by_position<'t, 's, T>(
    table: &'t T,
    working: &[(usize, &'s dyn Column)],
) -> std::result::Result<Vec<Pair<'t, 's>>, ValidationWarning>
where
    T: Table + ?Sized,
{
    let mut pairs = Vec::with_capacity(working.len());
    for &(position, column) in working {
        match table.column_at(position) {
            Some(series) => pairs.push((series, column)),
            None => {
                return Err(ValidationWarning::new(format!(
                    "The column {} exists in the schema at position {} but the table has only {} columns",
                    column.name(),
                    position,
                    table.column_count()
                ))
                .with_column(column.name()));
            }
        }
    }
    Ok(pairs)
}

/// Pair each working column with the table column carrying the same header.
///
/// The first unmatched or ambiguous name stops pairing.
fn pair_by_name<'t, 's, T>(
    table: &'t T,
    working: &[(usize, &'s dyn Column)],
) -> std::result::Result<Vec<Pair<'t, 's>>, ValidationWarning>
where
    T: Table + ?Sized,
{
    let headers = table.column_names();
    let mut pairs = Vec::with_capacity(working.len());

    for &(_, column) in working {
        let name = column.name();
        let matches = headers.iter().filter(|h| **h == name).count();

        if matches > 1 {
            return Err(ValidationWarning::new(format!(
                "The column {} appears {} times in the table",
                name, matches
            ))
            .with_column(name));
        }

        match table.column(name) {
            Some(series) => pairs.push((series, column)),
            None => {
                return Err(ValidationWarning::new(format!(
                    "The column {} exists in the schema but not in the table",
                    name
                ))
                .with_column(name));
            }
        }
    }

    Ok(pairs)
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("columns", &self.column_names())
            .field("ordered", &self.ordered)
            .finish()
    }
}
