//! Cell-level validation rules attached to schema columns.

use std::collections::HashSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::Series;

use super::warning::ValidationWarning;

/// Trait for validation rules.
pub trait Validation: Send + Sync {
    /// Text appended after the value in each warning.
    fn message(&self) -> String;

    /// Run the rule over one column and return a warning per failing cell.
    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning>;
}

/// Emit one warning for every cell that does not pass `check`.
fn element_warnings(
    series: &Series<'_>,
    message: &str,
    mut check: impl FnMut(&str) -> bool,
) -> Vec<ValidationWarning> {
    series
        .iter()
        .filter(|(_, value)| !check(*value))
        .map(|(row, value)| {
            ValidationWarning::new(message)
                .with_value(value)
                .with_row(row)
                .with_column(series.name())
        })
        .collect()
}

/// Target types for [`CanConvert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Boolean values (true/false, yes/no, 1/0).
    Boolean,
    /// Text; every cell converts.
    String,
}

impl ValueType {
    /// Returns true if `value` parses as this type.
    pub fn accepts(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match self {
            ValueType::Integer => trimmed.parse::<i64>().is_ok(),
            ValueType::Float => trimmed.parse::<f64>().is_ok(),
            ValueType::Boolean => matches!(
                trimmed.to_lowercase().as_str(),
                "true" | "false" | "yes" | "no" | "t" | "f" | "y" | "n" | "1" | "0"
            ),
            ValueType::String => true,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}

/// Numeric values must lie in the half-open range `[min, max)`.
///
/// Cells that do not parse as numbers fail.
#[derive(Debug, Clone)]
pub struct InRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl InRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    fn contains(&self, value: &str) -> bool {
        match value.trim().parse::<f64>() {
            Ok(num) => {
                let above_min = self.min.map(|m| num >= m).unwrap_or(true);
                let below_max = self.max.map(|m| num < m).unwrap_or(true);
                above_min && below_max
            }
            Err(_) => false,
        }
    }
}

impl Validation for InRange {
    fn message(&self) -> String {
        format!(
            "was not in the range [{}, {})",
            self.min.map(|v| v.to_string()).unwrap_or("-inf".to_string()),
            self.max.map(|v| v.to_string()).unwrap_or("inf".to_string())
        )
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| self.contains(v))
    }
}

/// Values must be one of a fixed set of options.
#[derive(Debug, Clone)]
pub struct InList {
    options: Vec<String>,
    case_sensitive: bool,
}

impl InList {
    pub fn new(options: Vec<String>, case_sensitive: bool) -> Self {
        Self {
            options,
            case_sensitive,
        }
    }
}

impl Validation for InList {
    fn message(&self) -> String {
        format!(
            "is not in the list of legal options ({})",
            self.options.join(", ")
        )
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| {
            if self.case_sensitive {
                self.options.iter().any(|o| o == v)
            } else {
                let lowered = v.to_lowercase();
                self.options.iter().any(|o| o.to_lowercase() == lowered)
            }
        })
    }
}

/// Values must contain a match for a regular expression.
///
/// The search is unanchored; use `^...$` for a full match.
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: Regex,
}

impl MatchesPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Validation for MatchesPattern {
    fn message(&self) -> String {
        format!("does not match the pattern \"{}\"", self.pattern.as_str())
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| self.pattern.is_match(v))
    }
}

/// Values must not start with whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingWhitespace;

impl Validation for LeadingWhitespace {
    fn message(&self) -> String {
        "contains leading whitespace".to_string()
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| v.trim_start() == v)
    }
}

/// Values must not end with whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespace;

impl Validation for TrailingWhitespace {
    fn message(&self) -> String {
        "contains trailing whitespace".to_string()
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| v.trim_end() == v)
    }
}

/// Values must parse as the target type.
#[derive(Debug, Clone, Copy)]
pub struct CanConvert(pub ValueType);

impl Validation for CanConvert {
    fn message(&self) -> String {
        format!("cannot be converted to type {}", self.0)
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| self.0.accepts(v))
    }
}

/// Values must parse with a `strftime`-style format.
///
/// A value passes if it parses as a date-time, a date, or a time.
#[derive(Debug, Clone)]
pub struct DateFormat {
    format: String,
}

impl DateFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    fn parses(&self, value: &str) -> bool {
        NaiveDateTime::parse_from_str(value, &self.format).is_ok()
            || NaiveDate::parse_from_str(value, &self.format).is_ok()
            || NaiveTime::parse_from_str(value, &self.format).is_ok()
    }
}

impl Validation for DateFormat {
    fn message(&self) -> String {
        format!("does not match the date format string \"{}\"", self.format)
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message(), |v| self.parses(v))
    }
}

/// Every value must be unique; repeats after the first occurrence fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsDistinct;

impl Validation for IsDistinct {
    fn message(&self) -> String {
        "contains values that are not unique".to_string()
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        let mut seen = HashSet::new();
        element_warnings(series, &self.message(), |v| seen.insert(v.to_string()))
    }
}

/// A caller-supplied predicate over single cells.
pub struct CustomElement {
    message: String,
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl CustomElement {
    pub fn new(
        message: impl Into<String>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl fmt::Debug for CustomElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomElement")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Validation for CustomElement {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn validate(&self, series: &Series<'_>) -> Vec<ValidationWarning> {
        element_warnings(series, &self.message, |v| (self.predicate)(v))
    }
}
