//! Fuzz target for JSON record decoding.
//!
//! Invalid documents must surface as errors, never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabsight::{analyze_records, records_from_json};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(records) = records_from_json(text) {
            let _ = analyze_records(&records);
        }
    }
});
