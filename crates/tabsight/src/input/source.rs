//! Data source loading and metadata.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::tokenizer::{detect_delimiter, Tokenizer, TokenizerConfig};
use crate::error::{Result, TabsightError};
use crate::value::{Record, Value};

/// Input encodings that can be turned into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    Csv,
    Tsv,
    Json,
}

impl DataFormat {
    /// Guess the format from a file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(DataFormat::Csv),
            "tsv" | "tab" => Some(DataFormat::Tsv),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }

    /// Guess the format from the text itself.
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('[') {
            return DataFormat::Json;
        }
        match detect_delimiter(content) {
            '\t' => DataFormat::Tsv,
            _ => DataFormat::Csv,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Csv => write!(f, "csv"),
            DataFormat::Tsv => write!(f, "tsv"),
            DataFormat::Json => write!(f, "json"),
        }
    }
}

/// Metadata about the analyzed source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path (empty for in-memory input).
    pub file: String,
    /// Full path to the file, if any.
    pub path: Option<PathBuf>,
    /// SHA-256 hash of the raw contents.
    pub hash: String,
    /// Size of the raw contents in bytes.
    pub size_bytes: u64,
    /// Detected or requested format.
    pub format: DataFormat,
    /// Number of records decoded.
    pub row_count: usize,
    /// Number of distinct column names across all records.
    pub column_count: usize,
    /// When the source was loaded.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe raw contents that decoded into `records`.
    pub fn new(path: Option<PathBuf>, contents: &[u8], format: DataFormat, records: &[Record]) -> Self {
        let file = path
            .as_deref()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let column_count = records
            .iter()
            .flat_map(|r| r.keys())
            .collect::<indexmap::IndexSet<_>>()
            .len();

        Self {
            file,
            path,
            hash,
            size_bytes: contents.len() as u64,
            format,
            row_count: records.len(),
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}

/// Decode in-memory text in the given format.
///
/// `tokenizer` is used for comma-separated text; TSV always splits on tabs.
pub fn load_str(content: &str, format: DataFormat, tokenizer: &Tokenizer) -> Result<Vec<Record>> {
    match format {
        DataFormat::Json => records_from_json(content),
        DataFormat::Csv => Ok(tokenizer.tokenize(content)),
        DataFormat::Tsv => Ok(Tokenizer::with_config(TokenizerConfig {
            delimiter: '\t',
            ..Default::default()
        })
        .tokenize(content)),
    }
}

/// Read a file, pick its format, and decode it.
///
/// The format comes from the extension when it is recognised, otherwise from
/// the content. A CSV file with a non-comma delimiter is re-tokenized with the
/// detected delimiter unless `tokenizer` already uses a custom one.
pub fn load_file(path: &Path, tokenizer: &Tokenizer) -> Result<(Vec<Record>, SourceMetadata)> {
    let contents = fs::read(path).map_err(|e| TabsightError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&contents);

    let format = DataFormat::from_extension(path).unwrap_or_else(|| DataFormat::sniff(&text));

    let records = if format == DataFormat::Csv && tokenizer.delimiter() == ',' {
        let delimiter = detect_delimiter(&text);
        if delimiter == ',' {
            tokenizer.tokenize(&text)
        } else {
            debug!(?delimiter, "using detected delimiter");
            Tokenizer::with_config(TokenizerConfig {
                delimiter,
                ..Default::default()
            })
            .tokenize(&text)
        }
    } else {
        load_str(&text, format, tokenizer)?
    };

    let metadata = SourceMetadata::new(Some(path.to_path_buf()), &contents, format, &records);
    Ok((records, metadata))
}

/// Decode a JSON array of objects into records.
///
/// Numbers and strings map directly. Booleans become [`Value::Flag`] and
/// nested arrays or objects [`Value::Nested`], so neither counts as text.
/// Nulls drop the key. Array elements that are not objects are skipped.
pub fn records_from_json(content: &str) -> Result<Vec<Record>> {
    let document: serde_json::Value = serde_json::from_str(content)?;

    let serde_json::Value::Array(items) = document else {
        return Err(TabsightError::UnsupportedFormat(
            "expected a JSON array of objects".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let serde_json::Value::Object(fields) = item else {
            warn!(index, "skipping JSON element that is not an object");
            continue;
        };

        let record: Record = fields
            .into_iter()
            .filter_map(|(key, value)| json_to_value(value).map(|v| (key, v)))
            .collect();
        records.push(record);
    }

    debug!(rows = records.len(), "decoded JSON records");
    Ok(records)
}

fn json_to_value(value: serde_json::Value) -> Option<Value> {
    use serde_json::Value as Json;

    match value {
        Json::Null => None,
        Json::Bool(b) => Some(Value::Flag(b)),
        Json::Number(n) => n.as_f64().map(Value::Number),
        Json::String(s) => Some(Value::Text(s)),
        nested @ (Json::Array(_) | Json::Object(_)) => Some(Value::Nested(nested)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DataFormat::from_extension(Path::new("a.CSV")), Some(DataFormat::Csv));
        assert_eq!(DataFormat::from_extension(Path::new("a.tsv")), Some(DataFormat::Tsv));
        assert_eq!(DataFormat::from_extension(Path::new("a.json")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_extension(Path::new("a.txt")), None);
        assert_eq!(DataFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(DataFormat::sniff("  [{\"a\": 1}]"), DataFormat::Json);
        assert_eq!(DataFormat::sniff("a\tb\n1\t2"), DataFormat::Tsv);
        assert_eq!(DataFormat::sniff("a,b\n1,2"), DataFormat::Csv);
    }

    #[test]
    fn test_records_from_json() {
        let json = r#"[
            {"region": "North", "units": 10, "active": true, "note": null},
            {"region": "South", "units": "5", "tags": ["x", "y"]}
        ]"#;
        let records = records_from_json(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("units"), Some(&Value::Number(10.0)));
        assert_eq!(records[0].get("active"), Some(&Value::Flag(true)));
        assert!(!records[0].contains_key("note"));
        assert_eq!(records[1].get("units"), Some(&Value::Text("5".into())));
        assert_eq!(
            records[1].get("tags"),
            Some(&Value::Nested(serde_json::json!(["x", "y"])))
        );
        assert_eq!(records[1]["tags"].to_string(), r#"["x","y"]"#);
    }

    #[test]
    fn test_json_key_order_preserved() {
        let records = records_from_json(r#"[{"z": 1, "a": 2, "m": 3}]"#).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_json_skips_non_objects() {
        let records = records_from_json(r#"[1, {"a": 1}, "x"]"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(records_from_json("{not json"), Err(TabsightError::Json(_))));
        assert!(matches!(
            records_from_json(r#"{"a": 1}"#),
            Err(TabsightError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_str_tsv() {
        let records = load_str("a\tb\n1\t2", DataFormat::Tsv, &Tokenizer::new()).unwrap();
        assert_eq!(records[0].get("b"), Some(&Value::Text("2".into())));
    }

    #[test]
    fn test_metadata() {
        let records = load_str("a,b\n1,2\n3,4", DataFormat::Csv, &Tokenizer::new()).unwrap();
        let meta = SourceMetadata::new(None, b"a,b\n1,2\n3,4", DataFormat::Csv, &records);

        assert_eq!(meta.file, "");
        assert_eq!(meta.row_count, 2);
        assert_eq!(meta.column_count, 2);
        assert_eq!(meta.size_bytes, 11);
        assert!(meta.hash.starts_with("sha256:"));
    }
}
