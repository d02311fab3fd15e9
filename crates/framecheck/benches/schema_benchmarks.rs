//! Schema validation benchmarks.
//!
//! Measures pairing and aggregation cost as tables grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use framecheck::validation::{CanConvert, InList, InRange, IsDistinct, MatchesPattern, ValueType};
use framecheck::{Column, ColumnSpec, DataTable, Schema};

const STATUSES: &[&str] = &["active", "inactive", "pending", "unknown"];

/// Build a table with a sprinkling of bad cells.
fn make_table(rows: usize) -> DataTable {
    let data = (0..rows)
        .map(|i| {
            vec![
                format!("S{:05}", i),
                if i % 17 == 0 { "n/a".to_string() } else { (i % 90).to_string() },
                STATUSES[i % STATUSES.len()].to_string(),
            ]
        })
        .collect();
    DataTable::new(
        vec!["sample_id".into(), "age".into(), "status".into()],
        data,
    )
}

fn make_schema(ordered: bool) -> Schema {
    let columns: Vec<Box<dyn Column>> = vec![
        Box::new(
            ColumnSpec::new("sample_id")
                .with_validation(MatchesPattern::new(r"^S\d{5}$").unwrap())
                .with_validation(IsDistinct),
        ),
        Box::new(
            ColumnSpec::new("age")
                .with_validation(CanConvert(ValueType::Integer))
                .with_validation(InRange::new(Some(0.0), Some(120.0))),
        ),
        Box::new(ColumnSpec::new("status").with_validation(InList::new(
            vec!["active".into(), "inactive".into(), "pending".into()],
            true,
        ))),
    ];
    Schema::new(columns, ordered).unwrap()
}

/// Benchmark full-table validation by name and by position.
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_validate");
    let by_name = make_schema(false);
    let by_position = make_schema(true);

    for rows in [100, 1_000, 10_000].iter() {
        let table = make_table(*rows);

        group.bench_with_input(BenchmarkId::new("by_name", rows), &table, |b, table| {
            b.iter(|| black_box(by_name.validate(table, None).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("by_position", rows), &table, |b, table| {
            b.iter(|| black_box(by_position.validate(table, None).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the structural short-circuit.
fn bench_structural(c: &mut Criterion) {
    let schema = make_schema(false);
    let table = DataTable::from_rows(&["sample_id", "age"], &[&["S00001", "3"]]);

    c.bench_function("column_count_mismatch", |b| {
        b.iter(|| black_box(schema.validate(&table, None).unwrap()))
    });
}

criterion_group!(benches, bench_validate, bench_structural);
criterion_main!(benches);
