//! Validation rules and the warnings they produce.

mod validators;
mod warning;

pub use validators::{
    CanConvert, CustomElement, DateFormat, InList, InRange, IsDistinct, LeadingWhitespace,
    MatchesPattern, TrailingWhitespace, Validation, ValueType,
};
pub use warning::ValidationWarning;
