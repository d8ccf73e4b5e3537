//! Tabsight: schema-free analysis of tabular records.
//!
//! Tabsight takes loosely-typed rows (decoded from CSV or JSON) and derives a
//! compact analytical summary without any prior schema knowledge: numeric
//! totals and averages, a categorical grouping, ranked trends, narrative
//! insights and a preview table.
//!
//! # Core Principles
//!
//! - **Schema-free**: Column kinds are inferred from the values themselves
//! - **Total**: Analysis never fails; missing or malformed data degrades to defaults
//! - **Deterministic**: The same records in the same order give the same result
//!
//! # Example
//!
//! ```
//! use tabsight::{analyze_records, parse_csv};
//!
//! let records = parse_csv("region,units\nNorth,10\nSouth,5\nNorth,8");
//! let result = analyze_records(&records);
//!
//! assert_eq!(result.trends[0].label, "North");
//! assert_eq!(result.trends[0].value, 18.0);
//! assert!(result.summary.starts_with("3 rows"));
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod value;

mod tabsight;

pub use crate::tabsight::{Report, Tabsight, TabsightConfig};
pub use analysis::{
    analyze_records, format_number, AnalysisResult, Analyzer, AnalyzerConfig, ColumnKind,
    ColumnProfile, Kpi, TablePreview, TrendPoint,
};
pub use error::{Result, TabsightError};
pub use input::{
    detect_delimiter, load_str, parse_csv, records_from_json, DataFormat, SourceMetadata,
    Tokenizer, TokenizerConfig,
};
pub use value::{loose_number, Record, Value};
