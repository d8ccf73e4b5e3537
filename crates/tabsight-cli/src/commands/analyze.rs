//! Analyze command - analyze a data file and print the summary.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use colored::Colorize;
use tabsight::{format_number, AnalyzerConfig, Report, Tabsight, TabsightConfig};
use tracing::debug;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json: bool,
    table_csv: Option<PathBuf>,
    max_trends: usize,
    preview_rows: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = TabsightConfig {
        analyzer: AnalyzerConfig {
            max_trends,
            preview_rows,
            ..Default::default()
        },
        ..Default::default()
    };
    let report = Tabsight::with_config(config).analyze(&file)?;

    if let Some(ref path) = output {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &report)?;
        debug!(path = %path.display(), "wrote report");
    }

    if let Some(ref path) = table_csv {
        report.analysis.table.write_csv(File::create(path)?)?;
        debug!(path = %path.display(), "wrote preview table");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, verbose);

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }
    if let Some(path) = table_csv {
        println!(
            "{} {}",
            "Table written to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

fn print_report(report: &Report, verbose: bool) {
    let analysis = &report.analysis;

    println!(
        "{} {} ({})",
        "Analyzed".cyan().bold(),
        report.source.file.white(),
        report.source.format
    );
    println!();
    println!("{}", analysis.summary);

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  {:12} {}", "hash", report.source.hash);
        println!("  {:12} {}", "size", report.source.size_bytes);
        println!("  {:12} {}", "columns", report.source.column_count);
    }

    if !analysis.kpis.is_empty() {
        println!();
        println!("{}", "KPIs:".yellow().bold());
        for kpi in &analysis.kpis {
            println!("  {:28} {}", kpi.label, kpi.value.white().bold());
        }
    }

    if !analysis.trends.is_empty() {
        println!();
        println!("{}", "Trends:".yellow().bold());
        for trend in &analysis.trends {
            println!("  {:28} {}", trend.label, format_number(trend.value));
        }
    }

    if !analysis.insights.is_empty() {
        println!();
        println!("{}", "Insights:".yellow().bold());
        for insight in &analysis.insights {
            println!("  {} {}", "•".blue(), insight);
        }
    }
}
