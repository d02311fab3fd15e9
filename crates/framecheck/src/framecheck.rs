//! Main Framecheck struct and public API.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::schema::{Schema, SchemaOutcome};
use crate::validation::ValidationWarning;

/// Configuration for a validation run.
#[derive(Debug, Clone, Default)]
pub struct FramecheckConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Restrict validation to these schema columns (None = all).
    pub subset: Option<Vec<String>>,
}

/// Result of validating a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Warnings sorted by row.
    pub warnings: Vec<ValidationWarning>,
    /// Summary statistics.
    pub summary: ReportSummary,
}

impl ValidationReport {
    /// True when validation found nothing.
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Summary of a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of columns declared by the schema.
    pub schema_columns: usize,
    /// Total number of warnings.
    pub total_warnings: usize,
    /// The table's shape did not match and cell checks were skipped.
    pub structural_failure: bool,
    /// Distinct rows with at least one warning.
    pub rows_with_issues: usize,
    /// Warnings per column, in first-seen order.
    pub warnings_by_column: IndexMap<String, usize>,
}

/// Validates data files against a fixed schema.
pub struct Framecheck {
    config: FramecheckConfig,
    parser: Parser,
    schema: Schema,
}

impl Framecheck {
    /// Create a validator with default configuration.
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, FramecheckConfig::default())
    }

    /// Create a validator with custom configuration.
    pub fn with_config(schema: Schema, config: FramecheckConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            schema,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse a data file and validate it.
    pub fn check(&self, path: impl AsRef<Path>) -> Result<ValidationReport> {
        let path = path.as_ref();

        let (table, source) = self.parser.parse_file(path)?;
        let outcome = self.check_table(&table)?;
        let summary = self.compute_summary(&outcome);

        info!(
            file = %source.file,
            rows = source.row_count,
            warnings = summary.total_warnings,
            structural = summary.structural_failure,
            "validation finished"
        );

        Ok(ValidationReport {
            source,
            warnings: outcome.warnings,
            summary,
        })
    }

    /// Validate an already parsed table with the configured subset.
    pub fn check_table(&self, table: &DataTable) -> Result<SchemaOutcome> {
        let subset: Option<Vec<&str>> = self
            .config
            .subset
            .as_ref()
            .map(|names| names.iter().map(|n| n.as_str()).collect());

        self.schema.validate_outcome(table, subset.as_deref())
    }

    /// Compute summary statistics from a validation outcome.
    fn compute_summary(&self, outcome: &SchemaOutcome) -> ReportSummary {
        let warnings = &outcome.warnings;

        let rows_with_issues = warnings
            .iter()
            .filter_map(|w| w.row())
            .collect::<HashSet<_>>()
            .len();

        let mut warnings_by_column: IndexMap<String, usize> = IndexMap::new();
        for warning in warnings {
            if let Some(column) = warning.column() {
                *warnings_by_column.entry(column.to_string()).or_insert(0) += 1;
            }
        }

        ReportSummary {
            schema_columns: self.schema.column_names().len(),
            total_warnings: warnings.len(),
            structural_failure: outcome.structural,
            rows_with_issues,
            warnings_by_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::input::Series;
    use crate::schema::{Column, ColumnSpec};
    use crate::validation::{CanConvert, InList, ValueType};

    /// Flags a column that has no values at all.
    struct NonEmptyColumn(&'static str);

    impl Column for NonEmptyColumn {
        fn name(&self) -> &str {
            self.0
        }

        fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
            if series.is_empty() {
                vec![ValidationWarning::new(format!("column {} is empty", self.0)).with_column(self.0)]
            } else {
                Vec::new()
            }
        }
    }

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn schema() -> Schema {
        let columns: Vec<Box<dyn Column>> = vec![
            Box::new(ColumnSpec::new("id").with_validation(CanConvert(ValueType::Integer))),
            Box::new(ColumnSpec::new("status").with_validation(InList::new(
                vec!["active".into(), "inactive".into()],
                true,
            ))),
        ];
        Schema::new(columns, false).unwrap()
    }

    #[test]
    fn test_check_clean_file() {
        let file = create_test_file("id,status\n1,active\n2,inactive\n");
        let report = Framecheck::new(schema()).check(file.path()).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.source.row_count, 2);
        assert_eq!(report.source.format, "csv");
        assert!(report.source.hash.starts_with("sha256:"));
    }

    #[test]
    fn test_summary_counts() {
        let file = create_test_file("id,status\nx,active\n2,gone\ny,gone\n");
        let report = Framecheck::new(schema()).check(file.path()).unwrap();

        assert_eq!(report.summary.total_warnings, 4);
        assert_eq!(report.summary.rows_with_issues, 3);
        assert!(!report.summary.structural_failure);
        assert_eq!(report.summary.warnings_by_column["id"], 2);
        assert_eq!(report.summary.warnings_by_column["status"], 2);
        let rows: Vec<_> = report.warnings.iter().filter_map(|w| w.row()).collect();
        assert_eq!(rows, vec![0, 1, 2, 2]);
    }

    #[test]
    fn test_structural_failure_flag() {
        let file = create_test_file("id\n1\n");
        let report = Framecheck::new(schema()).check(file.path()).unwrap();

        assert!(report.summary.structural_failure);
        assert_eq!(report.summary.rows_with_issues, 0);
        assert!(report.summary.warnings_by_column.is_empty());
    }

    #[test]
    fn test_column_warning_without_row_is_not_structural() {
        let file = create_test_file("a\n");
        let schema = Schema::new(vec![Box::new(NonEmptyColumn("a")) as Box<dyn Column>], false).unwrap();
        let report = Framecheck::new(schema).check(file.path()).unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].row().is_none());
        assert!(!report.summary.structural_failure);
        assert_eq!(report.summary.warnings_by_column["a"], 1);
    }

    #[test]
    fn test_configured_subset() {
        let file = create_test_file("id\nx\n");
        let config = FramecheckConfig {
            subset: Some(vec!["id".to_string()]),
            ..FramecheckConfig::default()
        };
        let report = Framecheck::with_config(schema(), config)
            .check(file.path())
            .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].column(), Some("id"));
    }
}
