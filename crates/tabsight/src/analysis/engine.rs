//! The analysis pipeline: classify, aggregate, rank, narrate, preview.

use tracing::debug;

use super::aggregate::aggregate;
use super::columns::{ColumnClassification, ColumnProfile};
use super::format::format_number;
use super::narrative::{build_summary, movement_insight, trend_insights};
use super::result::{AnalysisResult, Kpi, TablePreview};
use super::trends::{rank_groups, TrendPoint};
use crate::value::{Record, Value};

/// Limits and labels used by the analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Numeric fields that get a "Total" KPI.
    pub max_total_kpis: usize,
    /// Groups kept in the trend ranking.
    pub max_trends: usize,
    /// Rows in the preview table.
    pub preview_rows: usize,
    /// Numeric columns shown when the preview falls back to raw records.
    pub preview_measures: usize,
    /// Group label for rows missing the dimension.
    pub unknown_label: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_total_kpis: 3,
            max_trends: 8,
            preview_rows: 6,
            preview_measures: 2,
            unknown_label: "Unknown".to_string(),
        }
    }
}

/// Derives an [`AnalysisResult`] from records without a schema.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom limits.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze records. Never fails; an empty slice gives [`AnalysisResult::empty`].
    pub fn analyze(&self, records: &[Record]) -> AnalysisResult {
        if records.is_empty() {
            return AnalysisResult::empty();
        }

        let columns = ColumnClassification::classify(records);
        let numeric_fields = columns.numeric_fields();
        let dimension = columns.dimension();
        let primary = columns.primary_measure();

        debug!(
            rows = records.len(),
            numeric = numeric_fields.len(),
            categorical = columns.categorical_fields().len(),
            ?dimension,
            ?primary,
            "classified columns"
        );

        let aggregates = aggregate(records, numeric_fields);

        let mut kpis: Vec<Kpi> = aggregates
            .iter()
            .take(self.config.max_total_kpis)
            .map(|(field, agg)| Kpi {
                label: format!("Total {field}"),
                value: format_number(agg.total),
            })
            .collect();
        let primary_average = primary.map(|p| aggregates.get(p).map_or(0.0, |a| a.average()));
        if let (Some(p), Some(avg)) = (primary, primary_average) {
            kpis.push(Kpi {
                label: format!("Average {p}"),
                value: format_number(avg),
            });
        }

        let trends = match (dimension, primary) {
            (Some(dim), Some(measure)) => rank_groups(
                records,
                dim,
                measure,
                &self.config.unknown_label,
                self.config.max_trends,
            ),
            _ => Vec::new(),
        };
        debug!(groups = trends.len(), "ranked trends");

        let mut insights = Vec::new();
        if let Some(measure) = primary {
            insights.extend(trend_insights(&trends, measure));

            let latest = records
                .last()
                .and_then(|r| r.get(measure))
                .and_then(Value::as_number)
                .unwrap_or(0.0);
            insights.push(movement_insight(measure, latest, primary_average.unwrap_or(0.0)));
        }

        let summary = build_summary(records.len(), &aggregates, dimension);
        let table = self.preview(records, &columns, &trends);

        AnalysisResult {
            summary,
            insights,
            kpis,
            trends,
            table,
        }
    }

    /// Column classification for records, in first-seen order.
    pub fn profile(&self, records: &[Record]) -> Vec<ColumnProfile> {
        ColumnClassification::classify(records).profiles()
    }

    /// Grouped view when a dimension and measure exist, raw rows otherwise.
    fn preview(
        &self,
        records: &[Record],
        columns: &ColumnClassification,
        trends: &[TrendPoint],
    ) -> TablePreview {
        if let (Some(dim), Some(measure)) = (columns.dimension(), columns.primary_measure()) {
            return TablePreview {
                headers: vec![dim.to_string(), measure.to_string()],
                rows: trends
                    .iter()
                    .take(self.config.preview_rows)
                    .map(|t| vec![Value::Text(t.label.clone()), Value::Number(t.value)])
                    .collect(),
            };
        }

        let headers: Vec<String> = columns
            .numeric_fields()
            .iter()
            .take(self.config.preview_measures)
            .cloned()
            .collect();
        let rows = records
            .iter()
            .take(self.config.preview_rows)
            .map(|record| {
                headers
                    .iter()
                    .map(|h| record.get(h).cloned().unwrap_or_else(Value::empty))
                    .collect()
            })
            .collect();

        TablePreview { headers, rows }
    }
}

/// Analyze records with the default configuration.
pub fn analyze_records(records: &[Record]) -> AnalysisResult {
    Analyzer::new().analyze(records)
}
