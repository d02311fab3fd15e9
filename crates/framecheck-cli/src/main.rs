//! Framecheck CLI - validate tabular data against a schema.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            file,
            schema,
            columns,
            delimiter,
            no_header,
            json,
        } => commands::validate::run(commands::validate::ValidateArgs {
            file,
            schema,
            columns,
            delimiter,
            no_header,
            json,
            verbose: cli.verbose,
        }),

        Commands::Columns { schema } => commands::columns::run(schema).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
