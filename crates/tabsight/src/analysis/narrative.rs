//! Summary sentence and insight text.

use indexmap::IndexMap;

use super::aggregate::Aggregate;
use super::format::{format_change, format_number};
use super::trends::TrendPoint;

pub(crate) const EMPTY_SUMMARY: &str = "No rows detected in the supplied data.";
pub(crate) const EMPTY_INSIGHT: &str = "Upload a CSV or JSON file to generate insights.";

/// Three sentences: row count, measure totals, grouping.
pub fn build_summary(
    row_count: usize,
    aggregates: &IndexMap<String, Aggregate>,
    dimension: Option<&str>,
) -> String {
    let rows = if row_count == 1 { "row" } else { "rows" };
    let count_sentence = format!("{row_count} {rows} analyzed.");

    let measure_sentence = if aggregates.is_empty() {
        "No numeric measures detected.".to_string()
    } else {
        let totals: Vec<String> = aggregates
            .iter()
            .map(|(field, agg)| format!("{field} (total {})", format_number(agg.total)))
            .collect();
        format!("Measures: {}.", totals.join(", "))
    };

    let grouping_sentence = match dimension {
        Some(dim) => format!("Primary grouping: {dim}."),
        None => "No categorical dimensions found.".to_string(),
    };

    [count_sentence, measure_sentence, grouping_sentence].join(" ")
}

/// Leader and laggard of the ranked groups.
pub fn trend_insights(trends: &[TrendPoint], measure: &str) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(top) = trends.first() {
        insights.push(format!(
            "{} leads {} with {}.",
            top.label,
            measure,
            format_number(top.value)
        ));
    }
    if trends.len() > 1 {
        if let Some(last) = trends.last() {
            insights.push(format!(
                "{} trails the ranking with {}.",
                last.label,
                format_number(last.value)
            ));
        }
    }

    insights
}

/// How the most recent value of the measure compares with its average.
pub fn movement_insight(measure: &str, latest: f64, average: f64) -> String {
    if average == 0.0 {
        return format!("The latest {measure} reading stayed flat.");
    }

    let percent = (latest - average) / average * 100.0;
    let avg = format_number(average);
    if percent > 0.0 {
        format!(
            "The latest {measure} reading is up {}% against the average of {avg}.",
            format_change(percent)
        )
    } else if percent < 0.0 {
        format!(
            "The latest {measure} reading dipped {}% below the average of {avg}.",
            format_change(percent)
        )
    } else {
        format!("The latest {measure} reading sits on the average of {avg}.")
    }
}
