//! Validate command - check a data file against a schema definition.

use std::path::PathBuf;

use colored::Colorize;
use framecheck::input::parse_delimiter;
use framecheck::{Framecheck, FramecheckConfig, ParserConfig, SchemaDefinition};

pub struct ValidateArgs {
    pub file: PathBuf,
    pub schema: PathBuf,
    pub columns: Option<Vec<String>>,
    pub delimiter: Option<String>,
    pub no_header: bool,
    pub json: bool,
    pub verbose: bool,
}

/// Returns `Ok(true)` when the file passed validation.
pub fn run(args: ValidateArgs) -> Result<bool, Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let schema = SchemaDefinition::from_file(&args.schema)?.build()?;

    let delimiter = args.delimiter.as_deref().map(parse_delimiter).transpose()?;
    let config = FramecheckConfig {
        parser: ParserConfig {
            delimiter,
            has_header: !args.no_header,
            ..ParserConfig::default()
        },
        subset: args.columns,
    };

    let checker = Framecheck::with_config(schema, config);
    let report = checker.check(&args.file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.is_valid());
    }

    if args.verbose {
        println!(
            "{} {} ({} rows, {} columns, {})",
            "Validated".cyan().bold(),
            report.source.file.white(),
            report.source.row_count,
            report.source.column_count,
            report.source.format
        );
    }

    for warning in &report.warnings {
        println!("{}", warning);
    }

    if report.is_valid() {
        println!("{}", "No issues found".green());
    } else if report.summary.structural_failure {
        eprintln!("{}", "Table shape does not match the schema; cell checks skipped".red());
    } else {
        eprintln!(
            "Found {} warnings in {} rows",
            report.summary.total_warnings.to_string().yellow().bold(),
            report.summary.rows_with_issues
        );
        if args.verbose {
            for (column, count) in &report.summary.warnings_by_column {
                eprintln!("  {:20} {}", column, count);
            }
        }
    }

    Ok(report.is_valid())
}
