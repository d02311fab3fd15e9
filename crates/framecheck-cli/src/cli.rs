//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Framecheck: validate tabular data against a declarative schema
#[derive(Parser)]
#[command(name = "framecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a data file against a schema
    Validate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path to the JSON schema definition
        #[arg(short, long, value_name = "SCHEMA")]
        schema: PathBuf,

        /// Only validate these schema columns (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Field delimiter (default: auto-detect; use "tab" for TSV)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// The first row is data, not a header
        #[arg(long)]
        no_header: bool,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the columns a schema declares
    Columns {
        /// Path to the JSON schema definition
        #[arg(short, long, value_name = "SCHEMA")]
        schema: PathBuf,
    },
}
