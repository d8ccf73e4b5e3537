//! Input decoding: delimited text tokenizing and source loading.

mod source;
mod tokenizer;

pub use source::{load_file, load_str, records_from_json, DataFormat, SourceMetadata};
pub use tokenizer::{detect_delimiter, parse_csv, Tokenizer, TokenizerConfig};
