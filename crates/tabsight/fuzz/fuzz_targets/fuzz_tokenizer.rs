//! Fuzz target for the delimited-text tokenizer and analysis.
//!
//! Checks that tokenizing and analyzing:
//! 1. Never panic on any input, including broken quoting
//! 2. Keep the output limits

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabsight::{analyze_records, detect_delimiter, parse_csv};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let _ = detect_delimiter(&text);

    let records = parse_csv(&text);
    let result = analyze_records(&records);

    assert!(result.kpis.len() <= 4);
    assert!(result.trends.len() <= 8);
    assert!(result.table.rows.len() <= 6);
});
