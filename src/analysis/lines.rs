//! Per-line heuristics: terminator check, brace accounting, and
//! function-header name extraction.
//!
//! Every rule here is a string heuristic over a single trimmed line.
//! Multi-line statements, labels, and block openers with the brace on the
//! next line are outside what the rules can see, so both false positives
//! and false negatives occur on such shapes.

use super::{BraceBalance, Diagnostic, SourceLine};

/// Outcome of classifying one line.
#[derive(Debug, Clone, Default)]
pub struct LineClassification {
    pub diagnostics: Vec<Diagnostic>,
    /// Blank or comment-only lines skip all further analysis.
    pub is_blank_or_comment: bool,
    /// Candidate name when the line looks like a function header.
    pub function_name: Option<String>,
}

/// Apply the line heuristics and fold brace counts into `balance`.
pub fn classify_line(line: &SourceLine, balance: &mut BraceBalance) -> LineClassification {
    let mut out = LineClassification::default();
    let text = line.trimmed;

    if text.is_empty() || text.starts_with("//") {
        out.is_blank_or_comment = true;
        return out;
    }

    // A line passes the terminator check if it ends a statement, touches
    // a brace, ends on a closing paren, or is an include directive.
    if !text.ends_with(';')
        && !text.contains('{')
        && !text.contains('}')
        && !text.ends_with(')')
        && !text.starts_with("#include")
    {
        out.diagnostics
            .push(Diagnostic::missing_terminator(line.number));
    }

    balance.opened += text.matches('{').count();
    balance.closed += text.matches('}').count();

    // Function-header shape: parens plus an opening brace, not ending on
    // the closing paren. Fires on control statements too; that is part
    // of the contract.
    if text.contains('(') && text.contains(')') && text.contains('{') && !text.ends_with(')') {
        if let Some(open) = text.find('(') {
            out.function_name = Some(text[..open].trim().to_string());
        }
    }

    out
}
