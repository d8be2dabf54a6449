//! The analysis engine: comment stripping, line heuristics,
//! tokenization, keyword classification, and report assembly.

mod comments;
mod engine;
mod keywords;
mod lines;
mod tokens;
mod types;
mod words;

pub use comments::strip_comments;
pub use engine::Analyzer;
pub use keywords::{is_keyword, KEYWORDS};
pub use lines::{classify_line, LineClassification};
pub use tokens::tokenize;
pub use types::{
    BraceBalance, Diagnostic, DiagnosticKind, KeywordHit, Report, SourceLine, WordClass,
};
pub use words::classify_word;
