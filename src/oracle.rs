//! Spelling oracle: dictionary-backed word checking and suggestions.
//!
//! The engine never talks to a concrete dictionary directly; it goes
//! through the [`SpellOracle`] trait, so tests can substitute
//! deterministic doubles and a missing dictionary degrades to exact
//! keyword matching instead of failing the analysis.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a dictionary.
///
/// These are recovered at construction time by falling back to
/// [`NullOracle`]; they never propagate out of an analysis call.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("no hunspell dictionary found (looked in {0})")]
    NotFound(String),

    #[error("reading dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing dictionary: {0}")]
    Parse(String),
}

/// Word correctness and suggestion lookups.
pub trait SpellOracle: Send + Sync {
    /// Whether `word` is a valid word in the reference vocabulary.
    fn is_correct(&self, word: &str) -> bool;

    /// Suggestions for a misspelled word. May be empty.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Directories searched for system dictionaries.
const SYSTEM_DICT_DIRS: &[&str] = &[
    "/usr/share/hunspell",
    "/usr/local/share/hunspell",
    "/usr/share/myspell",
    "/usr/share/myspell/dicts",
];

/// Dictionary name loaded from those directories.
const DICT_NAME: &str = "en_US";

/// Oracle backed by a Hunspell-format dictionary via `spellbook`.
pub struct HunspellOracle {
    dict: spellbook::Dictionary,
}

impl std::fmt::Debug for HunspellOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HunspellOracle").finish_non_exhaustive()
    }
}

impl HunspellOracle {
    /// Load `en_US.aff`/`en_US.dic` from the given directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, OracleError> {
        let dir = dir.as_ref();
        let aff = std::fs::read_to_string(dir.join(format!("{}.aff", DICT_NAME)))?;
        let dic = std::fs::read_to_string(dir.join(format!("{}.dic", DICT_NAME)))?;
        Self::from_contents(&aff, &dic)
    }

    /// Build a dictionary from aff/dic file contents.
    pub fn from_contents(aff: &str, dic: &str) -> Result<Self, OracleError> {
        let dict = spellbook::Dictionary::new(aff, dic)
            .map_err(|e| OracleError::Parse(e.to_string()))?;
        Ok(Self { dict })
    }

    /// Search the well-known system locations for a dictionary.
    pub fn system() -> Result<Self, OracleError> {
        for dir in SYSTEM_DICT_DIRS {
            let path = PathBuf::from(dir);
            if path.join(format!("{}.aff", DICT_NAME)).exists() {
                return Self::from_dir(&path);
            }
        }
        Err(OracleError::NotFound(SYSTEM_DICT_DIRS.join(", ")))
    }
}

impl SpellOracle for HunspellOracle {
    fn is_correct(&self, word: &str) -> bool {
        self.dict.check(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.dict.suggest(word, &mut out);
        out
    }
}

/// Fail-open oracle used when no dictionary loads: every word is
/// reported correct and no suggestions are produced, so classification
/// degrades to exact keyword matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOracle;

impl SpellOracle for NullOracle {
    fn is_correct(&self, _word: &str) -> bool {
        true
    }

    fn suggest(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}
