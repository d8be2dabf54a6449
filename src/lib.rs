//! Slipcheck - heuristic syntax checking for C-like source text.
//!
//! Slipcheck gives fast, approximate feedback on superficial mistakes:
//! missing statement terminators, unbalanced braces, and keywords that
//! look misspelled. It is not a parser or a compiler front end - it never
//! builds a syntax tree or resolves grammar. Every check is a string
//! heuristic, and the occasional false positive is part of the contract.
//!
//! # Architecture
//!
//! - `analysis`: the engine - comment stripping, line heuristics,
//!   tokenization, keyword classification, report assembly
//! - `oracle`: the spelling capability behind keyword typo detection
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: the command-line surface
//!
//! # Example
//!
//! ```
//! use slipcheck::{Analyzer, DiagnosticKind};
//!
//! let analyzer = Analyzer::without_spelling();
//! let report = analyzer.analyze("int x = 5\n");
//! assert_eq!(report.diagnostics[0].kind, DiagnosticKind::MissingTerminator);
//! ```

pub mod analysis;
pub mod cli;
pub mod oracle;
pub mod report;

pub use analysis::{
    Analyzer, BraceBalance, Diagnostic, DiagnosticKind, KeywordHit, Report, SourceLine, WordClass,
};
pub use oracle::{HunspellOracle, NullOracle, OracleError, SpellOracle};
