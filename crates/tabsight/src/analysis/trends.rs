//! Grouping of a measure by a dimension and ranking of the groups.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::format::round_to_cents;
use crate::value::Record;

/// One group's share of the primary measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

/// Sum `measure` per distinct value of `dimension` and return the top groups.
///
/// Rows without the dimension go to `unknown_label`; unparseable measures
/// count as 0. Groups are sorted by descending sum, with ties kept in order
/// of first appearance, cut to `limit`, then rounded to two decimals.
pub fn rank_groups(
    records: &[Record],
    dimension: &str,
    measure: &str,
    unknown_label: &str,
    limit: usize,
) -> Vec<TrendPoint> {
    let mut buckets: IndexMap<String, f64> = IndexMap::new();

    for record in records {
        let label = record
            .get(dimension)
            .map(|v| v.to_string())
            .unwrap_or_else(|| unknown_label.to_string());
        let amount = record.get(measure).and_then(|v| v.as_number()).unwrap_or(0.0);
        *buckets.entry(label).or_insert(0.0) += amount;
    }

    let mut ranked: Vec<(String, f64)> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(limit)
        .map(|(label, value)| TrendPoint {
            label,
            value: round_to_cents(value),
        })
        .collect()
}
