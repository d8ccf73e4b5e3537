//! Example: Analyze a tabular data file with Tabsight.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- sales.csv

use std::env;
use std::path::Path;

use tabsight::Tabsight;

fn main() -> tabsight::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let report = Tabsight::new().analyze(path)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Tabsight Analysis: {} ({})", report.source.file, report.source.format);
    println!("{}", separator);
    println!();
    println!("{}", report.analysis.summary);
    println!();

    println!("Columns:");
    for column in &report.columns {
        println!("  {:20} {:?}", column.name, column.kind);
    }
    println!();

    println!("KPIs:");
    for kpi in &report.analysis.kpis {
        println!("  {:24} {}", kpi.label, kpi.value);
    }
    println!();

    if !report.analysis.trends.is_empty() {
        println!("Trends:");
        for trend in &report.analysis.trends {
            println!("  {:24} {}", trend.label, tabsight::format_number(trend.value));
        }
        println!();
    }

    println!("Insights:");
    for insight in &report.analysis.insights {
        println!("  - {}", insight);
    }

    Ok(())
}
