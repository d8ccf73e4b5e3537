//! Schema-free analysis of records.
//!
//! The pipeline runs in fixed order:
//!
//! 1. **Classification**: every key is numeric, categorical, or both, based on row evidence
//! 2. **Aggregation**: totals and averages per numeric field
//! 3. **Ranking**: the primary measure summed per dimension value
//! 4. **Narrative**: summary sentence and insights
//! 5. **Preview**: a small table of grouped or raw values

mod aggregate;
mod columns;
mod engine;
mod format;
mod narrative;
mod result;
mod trends;

pub use aggregate::{aggregate, Aggregate};
pub use columns::{ColumnClassification, ColumnKind, ColumnProfile};
pub use engine::{analyze_records, Analyzer, AnalyzerConfig};
pub use format::{format_change, format_number, round_to_cents};
pub use result::{AnalysisResult, Kpi, TablePreview};
pub use trends::{rank_groups, TrendPoint};
