//! Per-measure totals and averages.

use indexmap::{IndexMap, IndexSet};

use crate::value::Record;

/// Running sum over the values of one measure that parsed as numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    pub total: f64,
    pub count: usize,
}

impl Aggregate {
    /// Mean of the parsed values, or 0 when nothing parsed.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Aggregate each field over the records, keeping the field order.
///
/// Missing or unparseable cells are skipped from both total and count.
pub fn aggregate(records: &[Record], fields: &IndexSet<String>) -> IndexMap<String, Aggregate> {
    fields
        .iter()
        .map(|field| {
            let mut agg = Aggregate::default();
            for value in records.iter().filter_map(|r| r.get(field)) {
                if let Some(n) = value.as_number() {
                    agg.total += n;
                    agg.count += 1;
                }
            }
            (field.clone(), agg)
        })
        .collect()
}
