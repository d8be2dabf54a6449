//! The fixed keyword vocabulary.

use phf::phf_set;

/// Recognized keywords in display order: the C reserved words plus the
/// stream identifiers learners meet first.
pub const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "int", "long", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
    "cout", "cin", "endl",
];

static KEYWORD_SET: phf::Set<&'static str> = phf_set! {
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "int", "long", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
    "cout", "cin", "endl",
};

/// Membership test against the vocabulary.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}
