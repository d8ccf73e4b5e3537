//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabsight: schema-free analysis of CSV, TSV and JSON data
#[derive(Parser)]
#[command(name = "tabsight")]
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
    /// Analyze a data file and print measures, trends and insights
    Analyze {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the full report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write the preview table as CSV to this path
        #[arg(long, value_name = "PATH")]
        table_csv: Option<PathBuf>,

        /// Number of groups kept in the trend ranking
        #[arg(long, default_value = "8")]
        max_trends: usize,

        /// Number of rows in the preview table
        #[arg(long, default_value = "6")]
        preview_rows: usize,
    },

    /// Show how each column was classified
    Columns {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
