//! Character-class predicates used by token classification and the
//! sub-scanners.
//!
//! The language is defined over raw character codes; every class here is
//! ASCII, and characters outside these classes fall to the operator
//! catch-all.

/// Returns true if `c` can start an identifier: `@` or an ASCII letter.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '@' || c.is_ascii_alphabetic()
}

/// Returns true if `c` can continue an identifier: an ASCII letter or
/// digit, `_`, or `-`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Returns true if `c` is a recognized escape letter, the character allowed
/// after a backslash in character and string literals.
#[inline]
pub fn is_escape(c: char) -> bool {
    matches!(c, 'b' | 'n' | 'r' | 't' | '\'' | '"' | '\\')
}

/// Returns true if `c` is a raw control character the character-literal
/// scanner treats specially: newline, carriage return, tab, backspace, or
/// form feed.
#[inline]
pub fn is_literal_control(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | '\u{0008}' | '\u{000C}')
}

/// Returns true if `c` is whitespace the scan loop discards: ASCII space
/// or tab only. Newlines are not whitespace to the lexer; they reach
/// classification and lex as operators.
#[inline]
pub fn is_inline_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('Z'));
        assert!(is_ident_start('@'));
        assert!(!is_ident_start('1'));
        assert!(!is_ident_start('_'));
        assert!(!is_ident_start('-'));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('a'));
        assert!(is_ident_continue('9'));
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('-'));
        assert!(!is_ident_continue('@'));
        assert!(!is_ident_continue(' '));
    }

    #[test]
    fn test_escape_set() {
        for c in ['b', 'n', 'r', 't', '\'', '"', '\\'] {
            assert!(is_escape(c), "{c:?} should be an escape letter");
        }
        assert!(!is_escape('x'));
        assert!(!is_escape('0'));
    }

    #[test]
    fn test_literal_control() {
        assert!(is_literal_control('\n'));
        assert!(is_literal_control('\t'));
        assert!(is_literal_control('\u{000C}'));
        assert!(!is_literal_control(' '));
        assert!(!is_literal_control('a'));
    }

    #[test]
    fn test_inline_whitespace_excludes_newline() {
        assert!(is_inline_whitespace(' '));
        assert!(is_inline_whitespace('\t'));
        assert!(!is_inline_whitespace('\n'));
        assert!(!is_inline_whitespace('\r'));
        assert!(!is_inline_whitespace('\u{000C}'));
    }
}
