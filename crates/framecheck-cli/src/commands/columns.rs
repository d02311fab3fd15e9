//! Columns command - list the columns a schema declares.

use std::path::PathBuf;

use colored::Colorize;
use framecheck::{Column, SchemaDefinition};

pub fn run(schema_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let definition = SchemaDefinition::from_file(&schema_path)?;
    let schema = definition.build()?;

    let mode = if schema.is_ordered() { "by position" } else { "by name" };
    println!(
        "{} {} ({})",
        "Columns in".cyan().bold(),
        schema_path.display().to_string().white(),
        mode
    );

    for (i, column) in definition.columns.iter().enumerate() {
        let spec = column.build()?;
        let empty = if spec.allows_empty() {
            "empty allowed".green()
        } else {
            "required".yellow()
        };
        println!(
            "  {:>3}  {:20} {} rules, {}",
            i,
            spec.name(),
            spec.validation_count(),
            empty
        );
    }

    Ok(())
}
