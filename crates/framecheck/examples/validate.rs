//! Example: Validate a tabular data file against a JSON schema.
//!
//! Usage:
//!   cargo run --example validate -- <schema.json> <file_path>

use std::env;
use std::process;

use framecheck::{Framecheck, SchemaDefinition};

fn main() -> framecheck::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example validate -- <schema.json> <file_path>");
        process::exit(1);
    }

    let schema = SchemaDefinition::from_file(&args[1])?.build()?;
    println!("Schema columns: {}", schema.column_names().join(", "));

    let report = Framecheck::new(schema).check(&args[2])?;

    println!(
        "{}: {} rows, {} columns ({})",
        report.source.file, report.source.row_count, report.source.column_count, report.source.format
    );
    println!();

    for warning in &report.warnings {
        println!("  {}", warning);
    }

    println!();
    println!("Total warnings: {}", report.summary.total_warnings);
    for (column, count) in &report.summary.warnings_by_column {
        println!("  {:20} {}", column, count);
    }

    Ok(())
}
