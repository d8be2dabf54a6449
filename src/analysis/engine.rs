//! Analysis orchestration over a whole buffer.

use crate::oracle::{HunspellOracle, NullOracle, SpellOracle};

use super::{
    classify_line, classify_word, strip_comments, tokenize, BraceBalance, Diagnostic, KeywordHit,
    Report, SourceLine,
};

/// The analysis engine.
///
/// Holds only the spelling oracle; every `analyze` call starts from a
/// fresh brace balance and accumulators, so the engine is stateless
/// between invocations and safe to share across threads.
pub struct Analyzer {
    oracle: Box<dyn SpellOracle>,
}

impl Analyzer {
    /// Build an analyzer around an explicit oracle.
    pub fn new(oracle: Box<dyn SpellOracle>) -> Self {
        Self { oracle }
    }

    /// Build an analyzer with spelling lookups disabled: exact keyword
    /// matching only.
    pub fn without_spelling() -> Self {
        Self::new(Box::new(NullOracle))
    }

    /// Analyze one buffer and produce a report.
    ///
    /// Total over any input: an empty string yields an empty report, and
    /// no input can make this fail.
    pub fn analyze(&self, source: &str) -> Report {
        let stripped = strip_comments(source);
        let mut report = Report::new();
        let mut balance = BraceBalance::new();

        for (index, raw) in stripped.split('\n').enumerate() {
            let line = SourceLine::new(index + 1, raw);
            let classified = classify_line(&line, &mut balance);
            report.diagnostics.extend(classified.diagnostics);

            if classified.is_blank_or_comment {
                continue;
            }

            // The header name is recorded ahead of the line's word hits,
            // matching first-seen order in the source.
            if let Some(name) = classified.function_name {
                report.keyword_hits.push(KeywordHit::function_name(name));
            }

            for token in tokenize(line.trimmed) {
                report
                    .keyword_hits
                    .extend(classify_word(token, self.oracle.as_ref()));
            }
        }

        if balance.has_open_deficit() {
            report.diagnostics.push(Diagnostic::unbalanced_braces());
        }

        report
    }
}

impl Default for Analyzer {
    /// System-dictionary analyzer, degrading to exact keyword matching
    /// when no dictionary is installed.
    fn default() -> Self {
        match HunspellOracle::system() {
            Ok(oracle) => Self::new(Box::new(oracle)),
            Err(_) => Self::without_spelling(),
        }
    }
}
