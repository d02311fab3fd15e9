//! Behavioural tests for schema pairing, aggregation and ordering.

use std::sync::{Arc, Mutex};

use framecheck::validation::{CanConvert, ValueType};
use framecheck::{Column, ColumnSpec, DataTable, FramecheckError, Schema, Series, ValidationWarning};

/// A column that returns canned warnings and records what it was given.
struct ScriptedColumn {
    name: String,
    rows: Vec<usize>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ScriptedColumn {
    fn new(name: &str, rows: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.to_vec(),
            seen: Arc::default(),
        }
    }

    /// Handle to the headers of every series this column was handed.
    fn seen(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.seen)
    }
}

impl Column for ScriptedColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        self.seen.lock().unwrap().push(series.name().to_string());
        self.rows
            .iter()
            .map(|&row| {
                ValidationWarning::new(format!("from {}", self.name))
                    .with_value(series.get(row).unwrap_or_default())
                    .with_row(row)
                    .with_column(series.name())
            })
            .collect()
    }
}

fn int_column(name: &str) -> Box<dyn Column> {
    Box::new(ColumnSpec::new(name).with_validation(CanConvert(ValueType::Integer)))
}

fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
    DataTable::from_rows(headers, rows)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_empty_schema_fails_construction() {
    let result = Schema::new(Vec::new(), false);
    assert!(matches!(result, Err(FramecheckError::InvalidSchema(_))));
}

#[test]
fn test_column_names_follow_declaration_order() {
    let schema = Schema::new(vec![int_column("z"), int_column("a"), int_column("m")], false)
        .expect("valid schema");
    assert_eq!(schema.column_names(), vec!["z", "a", "m"]);
}

// =============================================================================
// Structural checks
// =============================================================================

#[test]
fn test_column_count_mismatch_returns_single_warning() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    let data = table(&["a", "b", "c"], &[&["x", "y", "z"]]);

    let warnings = schema.validate(&data, None).unwrap();

    assert_eq!(warnings.len(), 1);
    let warning = &warnings[0];
    assert!(warning.row().is_none());
    assert!(warning.column().is_none());
    assert!(warning.message().contains('2'));
    assert!(warning.message().contains('3'));
    assert_eq!(
        warning.to_string(),
        "Invalid number of columns. The schema specifies 2, but the table has 3"
    );
}

#[test]
fn test_missing_named_column_short_circuits() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    // Same column count, but "b" is absent and "a" has a bad cell
    let data = table(&["a", "c"], &[&["not a number", "1"]]);

    let warnings = schema.validate(&data, None).unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column(), Some("b"));
    assert!(warnings[0].row().is_none());
    assert_eq!(
        warnings[0].message(),
        "The column b exists in the schema but not in the table"
    );
}

#[test]
fn test_missing_column_with_subset() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    let data = table(&["a"], &[&["1"]]);

    let warnings = schema.validate(&data, Some(&["b"])).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column(), Some("b"));
}

// =============================================================================
// Pairing
// =============================================================================

#[test]
fn test_ordered_pairing_ignores_names() {
    let x = ScriptedColumn::new("x", &[]);
    let y = ScriptedColumn::new("y", &[]);
    let (x_seen, y_seen) = (x.seen(), y.seen());

    let schema = Schema::new(vec![Box::new(x) as Box<dyn Column>, Box::new(y)], true).unwrap();
    let data = table(&["p", "q"], &[&["1", "2"]]);

    assert!(schema.validate(&data, None).unwrap().is_empty());
    assert_eq!(*x_seen.lock().unwrap(), vec!["p"]);
    assert_eq!(*y_seen.lock().unwrap(), vec!["q"]);
}

#[test]
fn test_ordered_pairing_reports_cells_under_table_headers() {
    let schema = Schema::new(vec![int_column("x"), int_column("y")], true).unwrap();
    let data = table(&["p", "q"], &[&["1", "oops"]]);

    let warnings = schema.validate(&data, None).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].to_string(),
        "{row: 0, column: \"q\"}: \"oops\" cannot be converted to type integer"
    );
}

#[test]
fn test_unordered_pairing_matches_by_name() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    let data = table(&["b", "a"], &[&["bad", "1"]]);

    let warnings = schema.validate(&data, None).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column(), Some("b"));
    assert_eq!(warnings[0].value(), Some("bad"));
}

// =============================================================================
// Subset validation
// =============================================================================

#[test]
fn test_subset_validates_only_named_columns() {
    let schema = Schema::new(
        vec![int_column("a"), int_column("b"), int_column("c")],
        false,
    )
    .unwrap();
    let data = table(&["a", "b", "c"], &[&["1", "bad", "x"]]);

    let warnings = schema.validate(&data, Some(&["a", "c"])).unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column(), Some("c"));
}

#[test]
fn test_subset_skips_column_count_check() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    let data = table(&["a", "extra", "more"], &[&["1", "x", "y"]]);

    assert!(schema.validate(&data, Some(&["a"])).unwrap().is_empty());
}

#[test]
fn test_unknown_subset_column_is_an_argument_error() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    let data = table(&["a", "b"], &[&["1", "2"]]);

    match schema.validate(&data, Some(&["z"])) {
        Err(FramecheckError::Argument(msg)) => assert!(msg.contains("\"z\"")),
        other => panic!("expected argument error, got {:?}", other),
    }
}

// =============================================================================
// Aggregation and ordering
// =============================================================================

#[test]
fn test_sort_is_by_row_and_stable() {
    let schema = Schema::new(
        vec![
            Box::new(ScriptedColumn::new("first", &[5, 1, 3])) as Box<dyn Column>,
            Box::new(ScriptedColumn::new("second", &[1, 2])),
        ],
        false,
    )
    .unwrap();
    let data = table(
        &["first", "second"],
        &[&["a", "b"], &["c", "d"], &["e", "f"], &["g", "h"], &["i", "j"], &["k", "l"]],
    );

    let warnings = schema.validate(&data, None).unwrap();
    let order: Vec<_> = warnings
        .iter()
        .map(|w| (w.row().unwrap(), w.message().to_string()))
        .collect();

    assert_eq!(
        order,
        vec![
            (1, "from first".to_string()),
            (1, "from second".to_string()),
            (2, "from second".to_string()),
            (3, "from first".to_string()),
            (5, "from first".to_string()),
        ]
    );
}

#[test]
fn test_every_paired_column_is_validated() {
    let schema = Schema::new(vec![int_column("a"), int_column("b")], false).unwrap();
    let data = table(&["a", "b"], &[&["x", "1"], &["2", "y"], &["z", "w"]]);

    let warnings = schema.validate(&data, None).unwrap();
    let cells: Vec<_> = warnings
        .iter()
        .map(|w| (w.row().unwrap(), w.column().unwrap().to_string()))
        .collect();

    assert_eq!(
        cells,
        vec![
            (0, "a".to_string()),
            (1, "b".to_string()),
            (2, "a".to_string()),
            (2, "b".to_string()),
        ]
    );
}

#[test]
fn test_validate_is_repeatable() {
    let schema = Schema::new(vec![int_column("a")], false).unwrap();
    let data = table(&["a"], &[&["1"], &["x"]]);

    let first = schema.validate(&data, None).unwrap();
    let second = schema.validate(&data, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_schema_is_shareable_across_threads() {
    let schema = Schema::new(vec![int_column("a")], false).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let schema = &schema;
                scope.spawn(move || {
                    let value = if i % 2 == 0 { "1" } else { "bad" };
                    let data = table(&["a"], &[&[value]]);
                    schema.validate(&data, None).unwrap().len()
                })
            })
            .collect();

        let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![0, 1, 0, 1]);
    });
}
