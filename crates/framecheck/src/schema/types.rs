//! Declarative rule definitions used in schema files.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{
    CanConvert, DateFormat, InList, InRange, IsDistinct, LeadingWhitespace, MatchesPattern,
    TrailingWhitespace, Validation, ValueType,
};

fn default_true() -> bool {
    true
}

/// A validation rule as written in a schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleDefinition {
    /// Numeric values in `[min, max)`.
    InRange {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    /// Values must be in a specific set.
    InList {
        options: Vec<String>,
        #[serde(default = "default_true")]
        case_sensitive: bool,
    },
    /// Values must match a regex pattern.
    MatchesPattern { pattern: String },
    LeadingWhitespace,
    TrailingWhitespace,
    /// Values must parse as a type.
    CanConvert { to: ValueType },
    /// Values must parse with a `strftime` format.
    DateFormat { format: String },
    /// Values must be unique.
    IsDistinct,
}

impl RuleDefinition {
    /// Compile the definition into a runnable rule.
    pub fn build(&self) -> Result<Box<dyn Validation>> {
        let rule: Box<dyn Validation> = match self {
            RuleDefinition::InRange { min, max } => Box::new(InRange::new(*min, *max)),
            RuleDefinition::InList {
                options,
                case_sensitive,
            } => Box::new(InList::new(options.clone(), *case_sensitive)),
            RuleDefinition::MatchesPattern { pattern } => Box::new(MatchesPattern::new(pattern)?),
            RuleDefinition::LeadingWhitespace => Box::new(LeadingWhitespace),
            RuleDefinition::TrailingWhitespace => Box::new(TrailingWhitespace),
            RuleDefinition::CanConvert { to } => Box::new(CanConvert(*to)),
            RuleDefinition::DateFormat { format } => Box::new(DateFormat::new(format.clone())),
            RuleDefinition::IsDistinct => Box::new(IsDistinct),
        };
        Ok(rule)
    }
}
