//! Comment removal ahead of line analysis.
//!
//! Stripping is best-effort string surgery, not lexing: string literals
//! containing comment markers are stripped too, and the block pattern is
//! not nested-comment-aware.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `//` to end of line, per line.
    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)//.*$").unwrap();

    /// Simplified block comment, matched across lines in a single pass.
    /// Non-greedy, so an unterminated opener is left in place.
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

/// Remove line comments, then block comments, from the whole buffer.
pub fn strip_comments(source: &str) -> String {
    let without_line = LINE_COMMENT.replace_all(source, "");
    BLOCK_COMMENT.replace_all(&without_line, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_removed() {
        assert_eq!(strip_comments("int x = 5; // count"), "int x = 5; ");
    }

    #[test]
    fn test_whole_line_comment_leaves_blank_line() {
        assert_eq!(strip_comments("// int\nreturn 0;"), "\nreturn 0;");
    }

    #[test]
    fn test_block_comment_removed() {
        assert_eq!(strip_comments("int /* width */ x;"), "int  x;");
    }

    #[test]
    fn test_block_comment_spanning_lines_collapses() {
        // The matched text includes the newlines, so the surrounding
        // lines merge into one.
        assert_eq!(strip_comments("a/* one\ntwo */b"), "ab");
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        assert_eq!(strip_comments("/* a /* b */ c */"), " c */");
    }

    #[test]
    fn test_unterminated_opener_left_alone() {
        assert_eq!(strip_comments("int x; /* dangling"), "int x; /* dangling");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_comments(""), "");
    }
}
