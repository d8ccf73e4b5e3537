//! Tabsight CLI - schema-free analysis of tabular files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            json,
            table_csv,
            max_trends,
            preview_rows,
        } => commands::analyze::run(
            file,
            output,
            json,
            table_csv,
            max_trends,
            preview_rows,
            cli.verbose,
        ),

        Commands::Columns { file, json } => commands::columns::run(file, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
