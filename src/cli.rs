//! Command-line interface for slipcheck.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use crate::analysis::{Analyzer, KEYWORDS};
use crate::oracle::{HunspellOracle, NullOracle, SpellOracle};
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Heuristic syntax checker for C-like source.
///
/// Slipcheck flags likely surface mistakes - missing statement
/// terminators, unbalanced braces, and misspelled keywords - without
/// parsing the code. The feedback is deliberately approximate: it is
/// aimed at a learner typing code into a box, not at replacing a
/// compiler.
#[derive(Parser)]
#[command(name = "slipcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a source file (or stdin) for likely syntax slips
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
    /// List the keyword vocabulary
    Keywords,
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// File to analyze; reads stdin when absent or "-"
    pub path: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Directory holding en_US.aff/en_US.dic (default: system locations)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Disable dictionary lookups; exact keyword matching only
    #[arg(long)]
    pub no_spelling: bool,
}

/// Read the source to analyze, returning a display path and the text.
fn read_source(path: Option<&PathBuf>) -> anyhow::Result<(String, String)> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let source = std::fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("cannot read {:?}: {}", p, e))?;
            Ok((p.to_string_lossy().to_string(), source))
        }
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

/// Build the spelling oracle from the CLI flags.
///
/// A dictionary that fails to load downgrades to exact keyword matching
/// rather than aborting the run.
fn build_oracle(args: &CheckArgs) -> Box<dyn SpellOracle> {
    if args.no_spelling {
        return Box::new(NullOracle);
    }

    let loaded = match &args.dictionary {
        Some(dir) => HunspellOracle::from_dir(dir),
        None => HunspellOracle::system(),
    };

    match loaded {
        Ok(oracle) => Box::new(oracle),
        Err(e) => {
            eprintln!("Warning: {}; spelling suggestions disabled", e);
            Box::new(NullOracle)
        }
    }
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (path, source) = read_source(args.path.as_ref())?;

    let analyzer = Analyzer::new(build_oracle(args));
    let report = analyzer.analyze(&source);

    match args.format.as_str() {
        "json" => report::write_json(&path, &report)?,
        _ => report::write_pretty(&path, &report),
    }

    // Findings never fail the run; the report itself is the outcome.
    Ok(EXIT_SUCCESS)
}

/// Run the keywords command.
pub fn run_keywords() -> anyhow::Result<i32> {
    println!("Recognized keywords:");
    println!();
    for word in KEYWORDS {
        println!("  {}", word);
    }
    Ok(EXIT_SUCCESS)
}
