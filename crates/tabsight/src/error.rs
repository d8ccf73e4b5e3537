//! Error types for the Tabsight library.
//!
//! Only loading can fail. Tokenizing and analysis are total over their input.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tabsight operations.
#[derive(Debug, Error)]
pub enum TabsightError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (table export).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input is not in a shape that can be turned into records.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Tabsight operations.
pub type Result<T> = std::result::Result<T, TabsightError>;
