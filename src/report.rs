//! Output formatting for analysis reports.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{Report, WordClass};

/// JSON report envelope.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub keyword_hits: Vec<JsonKeywordHit>,
}

/// JSON diagnostic entry.
#[derive(Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

/// JSON keyword hit entry.
#[derive(Serialize, Deserialize)]
pub struct JsonKeywordHit {
    pub word: String,
    pub class: String,
}

/// Build the JSON envelope for a report.
pub fn to_json_report(path: &str, report: &Report) -> JsonReport {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        diagnostics: report
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                kind: d.kind.as_str().to_string(),
                line: d.line,
                message: d.message.clone(),
            })
            .collect(),
        keyword_hits: report
            .keyword_hits
            .iter()
            .map(|h| JsonKeywordHit {
                word: h.word.clone(),
                class: h.class.as_str().to_string(),
            })
            .collect(),
    }
}

/// Write a report as pretty-printed JSON to stdout.
pub fn write_json(path: &str, report: &Report) -> anyhow::Result<()> {
    let envelope = to_json_report(path, report);
    let json = serde_json::to_string_pretty(&envelope)?;
    println!("{}", json);
    Ok(())
}

/// Write a report in human-readable form to stdout.
pub fn write_pretty(path: &str, report: &Report) {
    // Header
    println!();
    print!("  ");
    print!("{}", "slipcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Checking: ".dimmed());
    println!("{}", path);
    println!();

    // Diagnostics
    if report.diagnostics.is_empty() {
        println!("  {}", "No syntax errors found".green());
    } else {
        println!(
            "  {} ({}):",
            "Syntax errors".bold(),
            report.diagnostics.len()
        );
        for d in &report.diagnostics {
            println!("    - {}", d.message.red());
        }
    }
    println!();

    // Keyword hits
    if !report.keyword_hits.is_empty() {
        println!(
            "  {} ({}):",
            "Detected keywords".bold(),
            report.keyword_hits.len()
        );
        for hit in &report.keyword_hits {
            let word = match hit.class {
                WordClass::Keyword => hit.word.green(),
                WordClass::SuggestedKeyword => hit.word.blue(),
                WordClass::FunctionName => hit.word.cyan(),
            };
            println!("    {:<18} {}", hit.class.as_str().dimmed(), word);
        }
        println!();
    }
}
