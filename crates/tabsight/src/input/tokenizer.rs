//! Quote-aware delimited text tokenizer with delimiter detection.

use tracing::debug;

use crate::value::{Record, Value};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[char] = &['\t', ',', ';', '|'];

/// Lines considered by [`detect_delimiter`].
const SAMPLE_LINES: usize = 10;

/// Tokenizer configuration.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Field separator.
    pub delimiter: char,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            max_rows: None,
        }
    }
}

/// Turns delimited text into records keyed by the header row.
///
/// Tokenizing never fails. Blank lines are skipped, short rows are padded with
/// empty strings, long rows are cut to the header width, and an unterminated
/// quote swallows the rest of its line.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a comma-separated tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// The configured delimiter.
    pub fn delimiter(&self) -> char {
        self.config.delimiter
    }

    /// Tokenize text into records. The first non-blank line is the header.
    pub fn tokenize(&self, content: &str) -> Vec<Record> {
        let mut lines = content
            .trim()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty());

        let Some(header_line) = lines.next() else {
            return Vec::new();
        };
        let headers = self.split_fields(header_line);

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let records: Vec<Record> = lines
            .take(limit)
            .map(|line| {
                let mut fields = self.split_fields(line).into_iter();
                headers
                    .iter()
                    .map(|header| {
                        let value = fields.next().map(Value::Text).unwrap_or_else(Value::empty);
                        (header.clone(), value)
                    })
                    .collect()
            })
            .collect();

        debug!(
            columns = headers.len(),
            rows = records.len(),
            delimiter = ?self.config.delimiter,
            "tokenized delimited text"
        );

        records
    }

    /// Split one line into trimmed fields.
    ///
    /// `""` inside a quoted span is a literal quote; the delimiter inside a
    /// quoted span is literal text.
    pub fn split_fields(&self, line: &str) -> Vec<String> {
        let delimiter = self.config.delimiter;
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '"' {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            } else if ch == delimiter && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(ch);
            }
        }
        fields.push(current.trim().to_string());

        fields
    }
}

/// Tokenize comma-separated text with the default configuration.
pub fn parse_csv(content: &str) -> Vec<Record> {
    Tokenizer::new().tokenize(content)
}

/// Guess the delimiter of a delimited text from its first non-blank lines.
///
/// A candidate must appear in the header line. Among those, the one that
/// splits the most sampled lines into as many fields as the header wins, then
/// the one giving the header more fields. Ties go to the earlier entry of
/// `DELIMITERS`, so tab beats comma. With no candidate the answer is a comma.
pub fn detect_delimiter(content: &str) -> char {
    let sample: Vec<&str> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let mut best: Option<(Fit, char)> = None;
    for &candidate in DELIMITERS {
        let Some(fit) = Fit::measure(&sample, candidate) else {
            continue;
        };
        if best.is_none_or(|(top, _)| fit > top) {
            best = Some((fit, candidate));
        }
    }

    best.map_or(',', |(_, delimiter)| delimiter)
}

/// How well one candidate delimiter splits a sample. Compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Fit {
    /// Lines, header included, with the header's delimiter count.
    agreeing: usize,
    /// Delimiters outside quotes in the header.
    header_splits: usize,
}

impl Fit {
    fn measure(sample: &[&str], delimiter: char) -> Option<Self> {
        let (header, body) = sample.split_first()?;
        let header_splits = unquoted_count(header, delimiter);
        if header_splits == 0 {
            return None;
        }

        let agreeing = 1 + body
            .iter()
            .filter(|line| unquoted_count(line, delimiter) == header_splits)
            .count();
        Some(Self {
            agreeing,
            header_splits,
        })
    }
}

/// Occurrences of `delimiter` in `line` that sit outside double quotes.
fn unquoted_count(line: &str, delimiter: char) -> usize {
    line.chars()
        .fold((0, false), |(count, quoted), ch| match ch {
            '"' => (count, !quoted),
            c if c == delimiter && !quoted => (count + 1, quoted),
            _ => (count, quoted),
        })
        .0
}
