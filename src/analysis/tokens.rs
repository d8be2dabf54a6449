//! Word tokenization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Alphanumeric-and-underscore runs.
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// Split a line into word tokens. Punctuation and operators are dropped;
/// order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}
