//! Column classification from per-row evidence.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::value::Record;

/// How a column was classified across the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// At least one value parsed as a number and no text value failed to.
    Numeric,
    /// Only text values that never parsed as numbers.
    Categorical,
    /// Some values parsed as numbers, some text values did not.
    Mixed,
    /// No usable evidence, e.g. only JSON booleans or non-finite numbers.
    Unknown,
}

/// Classification summary for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    /// Rows whose value parsed as a number.
    pub numeric_count: usize,
    /// Rows whose value was text that did not parse.
    pub text_count: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Evidence {
    numeric: usize,
    text: usize,
}

/// Numeric and categorical column sets, each in first-seen order.
///
/// Evidence is collected per row and OR-ed across rows, so a column with both
/// parseable and unparseable text lands in both sets.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassification {
    numeric: IndexSet<String>,
    categorical: IndexSet<String>,
    evidence: IndexMap<String, Evidence>,
}

impl ColumnClassification {
    /// Classify every key of every record, in record order.
    pub fn classify(records: &[Record]) -> Self {
        let mut classification = Self::default();

        for record in records {
            for (key, value) in record {
                let evidence = classification.evidence.entry(key.clone()).or_default();
                if value.as_number().is_some() {
                    evidence.numeric += 1;
                    if !classification.numeric.contains(key) {
                        classification.numeric.insert(key.clone());
                    }
                } else if value.is_text() {
                    evidence.text += 1;
                    if !classification.categorical.contains(key) {
                        classification.categorical.insert(key.clone());
                    }
                }
            }
        }

        classification
    }

    /// Numeric columns in first-seen order.
    pub fn numeric_fields(&self) -> &IndexSet<String> {
        &self.numeric
    }

    /// Categorical columns in first-seen order.
    pub fn categorical_fields(&self) -> &IndexSet<String> {
        &self.categorical
    }

    /// The column chosen for grouping: the first categorical one.
    pub fn dimension(&self) -> Option<&str> {
        self.categorical.first().map(String::as_str)
    }

    /// The measure trends and averages are reported on: the first numeric column.
    pub fn primary_measure(&self) -> Option<&str> {
        self.numeric.first().map(String::as_str)
    }

    /// One profile per column seen, in first-seen order.
    pub fn profiles(&self) -> Vec<ColumnProfile> {
        self.evidence
            .iter()
            .map(|(name, evidence)| {
                let kind = match (self.numeric.contains(name), self.categorical.contains(name)) {
                    (true, true) => ColumnKind::Mixed,
                    (true, false) => ColumnKind::Numeric,
                    (false, true) => ColumnKind::Categorical,
                    (false, false) => ColumnKind::Unknown,
                };
                ColumnProfile {
                    name: name.clone(),
                    kind,
                    numeric_count: evidence.numeric,
                    text_count: evidence.text,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            record(&[("region", "North".into()), ("units", "10".into()), ("total", "2500".into())]),
            record(&[("region", "South".into()), ("units", "5".into()), ("total", "1300".into())]),
        ];
        let classification = ColumnClassification::classify(&records);

        let numeric: Vec<&String> = classification.numeric_fields().iter().collect();
        assert_eq!(numeric, ["units", "total"]);
        assert_eq!(classification.dimension(), Some("region"));
        assert_eq!(classification.primary_measure(), Some("units"));
    }

    #[test]
    fn test_loose_values() {
        let records = vec![record(&[("price", "$12.50".into()), ("qty", "bad".into())])];
        let classification = ColumnClassification::classify(&records);

        assert!(classification.numeric_fields().contains("price"));
        assert!(!classification.numeric_fields().contains("qty"));
        assert_eq!(classification.dimension(), Some("qty"));
    }

    #[test]
    fn test_mixed_column_in_both_sets() {
        let records = vec![
            record(&[("code", "A1".into())]),
            record(&[("code", "none".into())]),
        ];
        let classification = ColumnClassification::classify(&records);

        assert_eq!(classification.primary_measure(), Some("code"));
        assert_eq!(classification.dimension(), Some("code"));

        let profiles = classification.profiles();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].kind, ColumnKind::Mixed);
        assert_eq!(profiles[0].numeric_count, 1);
        assert_eq!(profiles[0].text_count, 1);
    }

    #[test]
    fn test_numbers_are_never_categorical() {
        let records = vec![record(&[("n", Value::Number(3.0)), ("bad", Value::Number(f64::NAN))])];
        let classification = ColumnClassification::classify(&records);

        assert!(classification.categorical_fields().is_empty());
        let profiles = classification.profiles();
        assert_eq!(profiles[0].kind, ColumnKind::Numeric);
        assert_eq!(profiles[1].kind, ColumnKind::Unknown);
    }

    #[test]
    fn test_order_across_records() {
        let records = vec![
            record(&[("b", "x".into())]),
            record(&[("a", "1".into()), ("b", "y".into())]),
            record(&[("c", "2".into())]),
        ];
        let classification = ColumnClassification::classify(&records);

        let numeric: Vec<&String> = classification.numeric_fields().iter().collect();
        assert_eq!(numeric, ["a", "c"]);
        let names: Vec<String> = classification.profiles().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
