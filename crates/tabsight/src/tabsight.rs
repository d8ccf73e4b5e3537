//! Main Tabsight struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{AnalysisResult, Analyzer, AnalyzerConfig, ColumnProfile};
use crate::error::Result;
use crate::input::{load_file, load_str, DataFormat, SourceMetadata, Tokenizer, TokenizerConfig};
use crate::value::Record;

/// Configuration for loading and analysis.
#[derive(Debug, Clone, Default)]
pub struct TabsightConfig {
    /// Tokenizer configuration for delimited text.
    pub tokenizer: TokenizerConfig,
    /// Analyzer limits and labels.
    pub analyzer: AnalyzerConfig,
}

/// Result of analyzing a data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the source.
    pub source: SourceMetadata,
    /// How each column was classified.
    pub columns: Vec<ColumnProfile>,
    /// The analysis itself.
    pub analysis: AnalysisResult,
}

/// Loads tabular sources and analyzes them.
pub struct Tabsight {
    tokenizer: Tokenizer,
    analyzer: Analyzer,
}

impl Tabsight {
    /// Create a new Tabsight instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(TabsightConfig::default())
    }

    /// Create a Tabsight instance with custom configuration.
    pub fn with_config(config: TabsightConfig) -> Self {
        Self {
            tokenizer: Tokenizer::with_config(config.tokenizer),
            analyzer: Analyzer::with_config(config.analyzer),
        }
    }

    /// Analyze a CSV, TSV or JSON file.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<Report> {
        let path = path.as_ref();
        let (records, source) = load_file(path, &self.tokenizer)?;

        info!(
            file = %source.file,
            format = %source.format,
            rows = source.row_count,
            "loaded source"
        );

        Ok(self.report(&records, source))
    }

    /// Analyze in-memory text. `format` of `None` sniffs the content.
    pub fn analyze_str(&self, content: &str, format: Option<DataFormat>) -> Result<Report> {
        let format = format.unwrap_or_else(|| DataFormat::sniff(content));
        let records = load_str(content, format, &self.tokenizer)?;
        let source = SourceMetadata::new(None, content.as_bytes(), format, &records);

        Ok(self.report(&records, source))
    }

    fn report(&self, records: &[Record], source: SourceMetadata) -> Report {
        Report {
            source,
            columns: self.analyzer.profile(records),
            analysis: self.analyzer.analyze(records),
        }
    }
}

impl Default for Tabsight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_csv_file() {
        let file = create_test_file("region,units\nNorth,10\nSouth,5\n", ".csv");

        let report = Tabsight::new().analyze(file.path()).unwrap();

        assert_eq!(report.source.format, DataFormat::Csv);
        assert_eq!(report.source.row_count, 2);
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.analysis.trends.len(), 2);
    }

    #[test]
    fn test_analyze_semicolon_csv() {
        let file = create_test_file("region;units\nNorth;10\nSouth;5\n", ".csv");

        let report = Tabsight::new().analyze(file.path()).unwrap();

        assert_eq!(report.source.column_count, 2);
        assert_eq!(report.analysis.trends[0].label, "North");
    }

    #[test]
    fn test_analyze_missing_file() {
        let result = Tabsight::new().analyze("/definitely/not/here.csv");
        assert!(matches!(result, Err(crate::TabsightError::Io { .. })));
    }

    #[test]
    fn test_analyze_str_json() {
        let report = Tabsight::new()
            .analyze_str(r#"[{"team": "a", "score": 3}, {"team": "b", "score": 9}]"#, None)
            .unwrap();

        assert_eq!(report.source.format, DataFormat::Json);
        assert_eq!(report.analysis.trends[0].label, "b");
    }
}
