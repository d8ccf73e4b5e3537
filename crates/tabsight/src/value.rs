//! Loosely-typed cell values and records.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Everything except digits, the decimal point and the minus sign.
static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// One row of input: column name to value, in column order.
pub type Record = IndexMap<String, Value>;

/// A single cell value.
///
/// Only `Number` and `Text` come out of delimited text. JSON input can also
/// carry booleans and nested arrays or objects, which are kept as their own
/// variants so they never count as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Flag(bool),
    Text(String),
    Nested(serde_json::Value),
}

impl Value {
    /// Loosely interpret this value as a number. See [`loose_number`].
    pub fn as_number(&self) -> Option<f64> {
        loose_number(self)
    }

    /// Returns true if the value is stored as text.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Empty text, used for padding short rows and missing cells.
    pub fn empty() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write_number(f, *n),
            Value::Flag(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::Nested(json) => write!(f, "{}", json),
        }
    }
}

/// Plain decimals in `[1e-6, 1e21)`, exponent form with a signed exponent
/// outside it (`1e+21`, `1e-7`).
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude = n.abs();
    // Normalise -0 so labels never read "-0".
    if n == 0.0 {
        return write!(f, "0");
    }
    if !n.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", n);
    }

    let scientific = format!("{:e}", n);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => write!(f, "{scientific}"),
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Coerce a value to a finite number.
///
/// Numbers pass through when finite. Text has every character other than
/// `0-9`, `.` and `-` removed, then the longest leading decimal literal is
/// parsed, so `"$12.50"` gives 12.5, `"1.2.3"` gives 1.2 and `"5-3"` gives 5.
/// Text with no digits left gives `None`, as do flags and nested values.
pub fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.is_finite().then_some(*n),
        Value::Text(s) => {
            let stripped = NON_NUMERIC.replace_all(s, "");
            leading_decimal(&stripped)
        }
        Value::Flag(_) | Value::Nested(_) => None,
    }
}

/// Parse the longest `-?digits[.digits]` prefix of a string made of digits, dots and minus signs.
fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = bytes.first() == Some(&b'-');
    if negative {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }

    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}
