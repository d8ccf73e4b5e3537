//! Property-based tests for the tokenizer and analysis engine.
//!
//! Properties verified:
//! 1. **No panics**: Tokenizing and analysis never crash on any input
//! 2. **Determinism**: Same input always produces same output
//! 3. **Invariants**: Row counts, KPI and trend limits, ordering
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p tabsight --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p tabsight --test property_tests
//! ```

use proptest::prelude::*;

use tabsight::{analyze_records, format_number, loose_number, parse_csv, Record, Value};

// =============================================================================
// Test Strategies
// =============================================================================

/// A plain cell without quotes, delimiters or line breaks.
fn plain_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]{1,8}",
        "-?[0-9]{1,6}(\\.[0-9]{1,3})?",
        "\\$[0-9]{1,4}\\.[0-9]{2}",
        Just(String::new()),
    ]
}

/// Well-formed CSV: a header plus rows of plain cells.
fn well_formed_csv() -> impl Strategy<Value = (String, usize)> {
    (1usize..6, 0usize..30).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(plain_cell(), cols), rows).prop_map(
            move |body| {
                let header: Vec<String> = (0..cols).map(|i| format!("col{i}")).collect();
                let mut text = header.join(",");
                text.push('\n');
                for row in &body {
                    // A row of empty cells with one column would be a blank line
                    let line = row.join(",");
                    if line.trim().is_empty() {
                        text.push('x');
                    } else {
                        text.push_str(&line);
                    }
                    text.push('\n');
                }
                (text, body.len())
            },
        )
    })
}

/// Records with a mix of text and numeric values.
fn records() -> impl Strategy<Value = Vec<Record>> {
    let value = prop_oneof![
        plain_cell().prop_map(Value::Text),
        (-1e6f64..1e6).prop_map(Value::Number),
    ];
    let record = prop::collection::vec(("[a-e]", value), 0..5)
        .prop_map(|pairs| pairs.into_iter().collect::<Record>());
    prop::collection::vec(record, 0..40)
}

/// Arbitrary (possibly malformed) text.
fn random_text() -> impl Strategy<Value = String> {
    "[a-z0-9,\"\\r\\n \\.\\-\\$]{0,200}"
}

// =============================================================================
// Tokenizer Properties
// =============================================================================

proptest! {
    /// Every non-blank data line becomes one record.
    #[test]
    fn row_count_matches((text, rows) in well_formed_csv()) {
        prop_assert_eq!(parse_csv(&text).len(), rows);
    }

    /// Every record carries exactly the header's columns.
    #[test]
    fn records_have_header_width(text in random_text()) {
        let records = parse_csv(&text);
        if let Some(first) = records.first() {
            let width = first.len();
            prop_assert!(records.iter().all(|r| r.len() == width));
        }
    }

    /// Tokenizing never panics on malformed quoting.
    #[test]
    fn never_panics_on_random_text(text in random_text()) {
        let _ = parse_csv(&text);
    }
}

// =============================================================================
// Analysis Properties
// =============================================================================

proptest! {
    /// Analysis never panics and respects output limits.
    #[test]
    fn output_limits_hold(records in records()) {
        let result = analyze_records(&records);

        prop_assert!(result.kpis.len() <= 4);
        prop_assert!(result.trends.len() <= 8);
        prop_assert!(result.table.rows.len() <= 6);
        prop_assert!(result.table.headers.len() <= 2);
    }

    /// Trends are sorted non-increasing by value.
    #[test]
    fn trends_are_sorted(records in records()) {
        let result = analyze_records(&records);
        prop_assert!(result.trends.windows(2).all(|w| w[0].value >= w[1].value));
    }

    /// Non-empty input leads the summary with its row count.
    #[test]
    fn summary_leads_with_row_count(records in records()) {
        prop_assume!(!records.is_empty());
        let result = analyze_records(&records);

        let leading = result.summary.split_whitespace().next().unwrap_or_default();
        prop_assert_eq!(leading, records.len().to_string());
    }

    /// Repeated analysis yields byte-identical JSON.
    #[test]
    fn analysis_is_deterministic(records in records()) {
        let first = serde_json::to_string(&analyze_records(&records)).unwrap();
        let second = serde_json::to_string(&analyze_records(&records)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Tokenized random text always analyzes.
    #[test]
    fn analyzes_tokenized_text(text in random_text()) {
        let _ = analyze_records(&parse_csv(&text));
    }
}

// =============================================================================
// Parsing and Formatting Properties
// =============================================================================

proptest! {
    /// Loose parsing only ever yields finite numbers.
    #[test]
    fn loose_numbers_are_finite(text in "\\PC{0,40}") {
        if let Some(n) = loose_number(&Value::Text(text)) {
            prop_assert!(n.is_finite());
        }
    }

    /// Plain decimal literals parse to themselves.
    #[test]
    fn decimal_literals_round_trip(n in -1e9f64..1e9) {
        let literal = format!("{n}");
        prop_assert_eq!(loose_number(&Value::Text(literal.clone())), literal.parse::<f64>().ok());
    }

    /// Formatted numbers never show more than two fraction digits.
    #[test]
    fn formatted_fraction_is_short(n in -1e12f64..1e12) {
        let formatted = format_number(n);
        if let Some((_, fraction)) = formatted.split_once('.') {
            prop_assert!(fraction.len() <= 2, "{}", formatted);
        }
    }
}
