//! Columns command - show column classification.

use std::path::PathBuf;

use colored::Colorize;
use tabsight::{ColumnKind, Tabsight};

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let report = Tabsight::new().analyze(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.columns)?);
        return Ok(());
    }

    println!(
        "{} columns in {} ({} rows)",
        report.columns.len().to_string().white().bold(),
        report.source.file,
        report.source.row_count
    );
    println!();

    for column in &report.columns {
        let kind = match column.kind {
            ColumnKind::Numeric => "numeric".green(),
            ColumnKind::Categorical => "categorical".cyan(),
            ColumnKind::Mixed => "mixed".yellow(),
            ColumnKind::Unknown => "unknown".red(),
        };
        if verbose {
            println!(
                "  {:24} {:12} numeric={} text={}",
                column.name, kind, column.numeric_count, column.text_count
            );
        } else {
            println!("  {:24} {}", column.name, kind);
        }
    }

    Ok(())
}
