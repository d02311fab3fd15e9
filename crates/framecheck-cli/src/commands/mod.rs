//! CLI command implementations.

pub mod columns;
pub mod validate;
