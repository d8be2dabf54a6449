//! Integration tests for the full analysis pipeline.
//!
//! These tests run the analyzer end to end against the testdata
//! fixtures and against inline snippets with a deterministic oracle.

use std::collections::HashMap;
use std::path::PathBuf;

use slipcheck::{Analyzer, DiagnosticKind, KeywordHit, SpellOracle, WordClass};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn read_fixture(name: &str) -> String {
    let path = testdata_path().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {:?}: {}", path, e))
}

/// Deterministic oracle double with canned suggestion lists.
struct StaticOracle {
    known: Vec<&'static str>,
    suggestions: HashMap<&'static str, Vec<&'static str>>,
}

impl SpellOracle for StaticOracle {
    fn is_correct(&self, word: &str) -> bool {
        self.known.contains(&word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions
            .get(word)
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .unwrap_or_default()
    }
}

#[test]
fn test_clean_fixture_has_no_diagnostics() {
    let report = Analyzer::without_spelling().analyze(&read_fixture("clean.cpp"));

    assert!(
        report.diagnostics.is_empty(),
        "clean.cpp should produce no diagnostics, got {:?}",
        report.diagnostics
    );
}

#[test]
fn test_clean_fixture_keyword_hits() {
    let report = Analyzer::without_spelling().analyze(&read_fixture("clean.cpp"));

    assert_eq!(
        report.keyword_hits,
        vec![
            KeywordHit::function_name("int main"),
            KeywordHit::keyword("int"),
            KeywordHit::keyword("int"),
            KeywordHit::keyword("cout"),
            KeywordHit::keyword("endl"),
            KeywordHit::keyword("return"),
        ]
    );
}

#[test]
fn test_slips_fixture_diagnostics() {
    let report = Analyzer::without_spelling().analyze(&read_fixture("slips.cpp"));

    assert_eq!(report.diagnostics.len(), 2);

    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::MissingTerminator);
    assert_eq!(report.diagnostics[0].line, Some(4));

    assert_eq!(report.diagnostics[1].kind, DiagnosticKind::UnbalancedBraces);
    assert_eq!(report.diagnostics[1].line, None);
}

#[test]
fn test_slips_fixture_flags_control_header() {
    // The header heuristic fires on the `if (x > 2) {` shape as well as
    // on `int main() {`. Both entries are expected.
    let report = Analyzer::without_spelling().analyze(&read_fixture("slips.cpp"));

    let names: Vec<&str> = report
        .keyword_hits
        .iter()
        .filter(|h| h.class == WordClass::FunctionName)
        .map(|h| h.word.as_str())
        .collect();
    assert_eq!(names, vec!["int main", "if"]);
}

#[test]
fn test_keyword_typo_end_to_end() {
    let analyzer = Analyzer::new(Box::new(StaticOracle {
        known: vec!["x"],
        suggestions: HashMap::from([
            ("whille", vec!["while", "wile"]),
            ("stract", vec!["struct", "tract"]),
        ]),
    }));

    let report = analyzer.analyze("whille (x > 0)\nstract point;\n");

    let suggested: Vec<&str> = report
        .keyword_hits
        .iter()
        .filter(|h| h.class == WordClass::SuggestedKeyword)
        .map(|h| h.word.as_str())
        .collect();
    assert_eq!(suggested, vec!["while", "struct"]);
}

#[test]
fn test_totality_on_awkward_input() {
    let analyzer = Analyzer::without_spelling();

    for source in [
        "",
        "\n\n\n",
        ";",
        "{",
        "}",
        "/* dangling",
        "//",
        "\u{fffd}\u{2028} odd whitespace\u{00a0};",
    ] {
        let _ = analyzer.analyze(source);
    }
}

#[test]
fn test_reports_are_reproducible() {
    let analyzer = Analyzer::without_spelling();
    let source = read_fixture("slips.cpp");

    assert_eq!(analyzer.analyze(&source), analyzer.analyze(&source));
}
