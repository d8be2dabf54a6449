//! Core types for analysis results.

use serde::{Deserialize, Serialize};

/// Kinds of issues the analyzer can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingTerminator,
    UnbalancedBraces,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingTerminator => "missing_terminator",
            DiagnosticKind::UnbalancedBraces => "unbalanced_braces",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single flagged issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based source line. Absent for whole-buffer conclusions.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    /// A missing statement terminator at the given line.
    pub fn missing_terminator(line: usize) -> Self {
        Self {
            kind: DiagnosticKind::MissingTerminator,
            line: Some(line),
            message: format!("Missing semicolon at line {}", line),
        }
    }

    /// More blocks opened than closed across the whole buffer.
    pub fn unbalanced_braces() -> Self {
        Self {
            kind: DiagnosticKind::UnbalancedBraces,
            line: None,
            message: "Missing closing brace".to_string(),
        }
    }
}

/// How a detected word was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// Exact member of the keyword vocabulary.
    Keyword,
    /// Keyword reached through a spelling suggestion for a misspelled word.
    SuggestedKeyword,
    /// Name extracted by the function-header heuristic.
    FunctionName,
}

impl WordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Keyword => "keyword",
            WordClass::SuggestedKeyword => "suggested_keyword",
            WordClass::FunctionName => "function_name",
        }
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected occurrence of a recognized (or corrected-to-recognized)
/// keyword. Occurrences are kept in source order and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub word: String,
    pub class: WordClass,
}

impl KeywordHit {
    pub fn keyword(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            class: WordClass::Keyword,
        }
    }

    pub fn suggested(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            class: WordClass::SuggestedKeyword,
        }
    }

    pub fn function_name(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            class: WordClass::FunctionName,
        }
    }
}

/// Running count of brace characters across one analysis pass.
///
/// Both counts only ever grow; the balance is reset by creating a fresh
/// value at the start of each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceBalance {
    pub opened: usize,
    pub closed: usize,
}

impl BraceBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when more blocks were opened than closed. A closing surplus
    /// is never reported.
    pub fn has_open_deficit(&self) -> bool {
        self.opened > self.closed
    }
}

/// A physical source line after comment stripping.
#[derive(Debug, Clone, Copy)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    pub raw: &'a str,
    pub trimmed: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self {
            number,
            raw,
            trimmed: raw.trim(),
        }
    }
}

/// Results of analyzing one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    pub keyword_hits: Vec<KeywordHit>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the analysis flagged anything.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of hits with the given classification.
    pub fn hit_count(&self, class: WordClass) -> usize {
        self.keyword_hits.iter().filter(|h| h.class == class).count()
    }
}
