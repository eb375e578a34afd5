//! Identifier lexing.

use crate::classes::is_ident_continue;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// Classification has already consumed the leading `@` or letter;
    /// this consumes the continuation run of letters, digits, underscores,
    /// and hyphens. Never fails.
    pub(crate) fn lex_identifier(&mut self) -> Result<Token<'a>, LexError> {
        while is_ident_continue(self.cursor.peek(0)) {
            self.cursor.advance();
        }
        Ok(self.cursor.emit(TokenKind::Identifier))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::{lex, lex_compat};

    #[test]
    fn test_simple_identifier() {
        let tokens = lex("foo").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "foo");
    }

    #[test]
    fn test_identifier_with_underscore_and_hyphen() {
        let tokens = lex("foo_bar-123").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "foo_bar-123");
    }

    #[test]
    fn test_at_identifier() {
        let tokens = lex("@handle").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "@handle");
    }

    #[test]
    fn test_lone_at() {
        let tokens = lex("@").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "@");
    }

    #[test]
    fn test_at_only_starts() {
        // `@` is not in the continuation set, so a second `@` begins a new
        // identifier.
        let tokens = lex("a@b").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["a", "@b"]);
    }

    #[test]
    fn test_identifier_stops_at_space() {
        let tokens = lex("abc def").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "abc");
        assert_eq!(tokens[1].lexeme, "def");
        assert_eq!(tokens[1].start, 4);
    }

    #[test]
    fn test_hyphen_stays_inside_identifier() {
        // After a letter, `-` continues the identifier instead of starting
        // a number.
        let tokens = lex("x-1").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "x-1");
    }

    #[test]
    fn test_digit_led_input_is_not_identifier() {
        let tokens = lex_compat("9lives");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].lexeme, "9");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "lives");
    }

    #[test]
    fn test_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = lex(&name).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme.len(), 10_000);
    }
}
