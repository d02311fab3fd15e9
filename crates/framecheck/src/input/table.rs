//! Table abstraction consumed by schema validation.

/// A borrowed view of one column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series<'a> {
    name: &'a str,
    values: Vec<&'a str>,
}

impl<'a> Series<'a> {
    /// Create a series from a column name and its cell values in row order.
    pub fn new(name: &'a str, values: Vec<&'a str>) -> Self {
        Self { name, values }
    }

    /// Column header this series was read from.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the cell at a zero-based row index.
    pub fn get(&self, row: usize) -> Option<&'a str> {
        self.values.get(row).copied()
    }

    /// Iterate over `(row, value)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.values.iter().copied().enumerate()
    }
}

/// Anything that exposes named columns in a stable order.
///
/// Row indices handed out through [`Series`] are zero-based positions of
/// data rows, header excluded.
pub trait Table {
    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Column headers in positional order.
    fn column_names(&self) -> Vec<&str>;

    /// Get the column at a zero-based position.
    fn column_at(&self, index: usize) -> Option<Series<'_>>;

    /// Get a column by header name.
    ///
    /// If several columns share the header, the leftmost one is returned.
    /// Callers that care about ambiguity should inspect [`Table::column_names`].
    fn column(&self, name: &str) -> Option<Series<'_>> {
        let index = self.column_names().iter().position(|h| *h == name)?;
        self.column_at(index)
    }

    /// All columns in positional order.
    fn columns(&self) -> Vec<Series<'_>> {
        (0..self.column_count())
            .filter_map(|i| self.column_at(i))
            .collect()
    }
}
