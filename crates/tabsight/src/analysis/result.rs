//! Analysis output types.

use std::io;

use serde::{Deserialize, Serialize};

use super::narrative::{EMPTY_INSIGHT, EMPTY_SUMMARY};
use super::trends::TrendPoint;
use crate::error::Result;
use crate::value::Value;

/// A headline figure, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

/// A small table for previewing the analyzed data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TablePreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TablePreview {
    /// Write the preview as CSV, header row first.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|v| v.to_string()))?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Everything derived from one set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Row count, measure totals and grouping in three sentences.
    pub summary: String,
    /// Narrative observations, most important first.
    pub insights: Vec<String>,
    /// Up to three totals plus the primary measure's average.
    pub kpis: Vec<Kpi>,
    /// Ranked groups of the primary measure, largest first.
    pub trends: Vec<TrendPoint>,
    pub table: TablePreview,
}

impl AnalysisResult {
    /// The result for an input with no rows.
    pub fn empty() -> Self {
        Self {
            summary: EMPTY_SUMMARY.to_string(),
            insights: vec![EMPTY_INSIGHT.to_string()],
            kpis: Vec::new(),
            trends: Vec::new(),
            table: TablePreview::default(),
        }
    }
}
