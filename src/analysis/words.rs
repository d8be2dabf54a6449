//! Keyword and spelling classification of individual tokens.

use crate::oracle::SpellOracle;

use super::{keywords, KeywordHit};

/// Classify one token.
///
/// An exact keyword yields a single hit. A word the oracle considers
/// correctly spelled is an ordinary identifier and yields nothing. A
/// misspelled word yields one hit per oracle suggestion that is itself a
/// keyword, so a single typo can fan out into several hits.
pub fn classify_word(word: &str, oracle: &dyn SpellOracle) -> Vec<KeywordHit> {
    if keywords::is_keyword(word) {
        return vec![KeywordHit::keyword(word)];
    }

    if oracle.is_correct(word) {
        return Vec::new();
    }

    oracle
        .suggest(word)
        .into_iter()
        .filter(|s| keywords::is_keyword(s))
        .map(KeywordHit::suggested)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::WordClass;
    use std::collections::HashMap;

    /// Deterministic oracle double: a fixed vocabulary plus canned
    /// suggestion lists.
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

    fn oracle() -> StaticOracle {
        StaticOracle {
            known: vec!["counter", "total"],
            suggestions: HashMap::from([
                ("whille", vec!["while", "wile"]),
                ("returm", vec!["return"]),
                ("integor", vec!["integer"]),
                ("flost", vec!["float", "frost", "for"]),
            ]),
        }
    }

    #[test]
    fn test_exact_keyword() {
        let hits = classify_word("int", &oracle());
        assert_eq!(hits, vec![KeywordHit::keyword("int")]);
    }

    #[test]
    fn test_ordinary_identifier_dropped() {
        assert!(classify_word("counter", &oracle()).is_empty());
    }

    #[test]
    fn test_misspelled_keyword_corrected() {
        let hits = classify_word("returm", &oracle());
        assert_eq!(hits, vec![KeywordHit::suggested("return")]);
    }

    #[test]
    fn test_suggestions_filtered_against_vocabulary() {
        // "wile" is a real word but not a keyword, so only "while"
        // survives.
        let hits = classify_word("whille", &oracle());
        assert_eq!(hits, vec![KeywordHit::suggested("while")]);
    }

    #[test]
    fn test_correction_outside_vocabulary_yields_nothing() {
        assert!(classify_word("integor", &oracle()).is_empty());
    }

    #[test]
    fn test_fan_out_preserved() {
        let hits = classify_word("flost", &oracle());
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.class == WordClass::SuggestedKeyword));
        assert_eq!(hits[0].word, "float");
        assert_eq!(hits[1].word, "for");
    }

    #[test]
    fn test_unknown_word_with_no_suggestions() {
        assert!(classify_word("zzyx", &oracle()).is_empty());
    }
}
