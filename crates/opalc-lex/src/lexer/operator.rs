//! Operator lexing.
//!
//! Operators are one or two characters. The doubled forms `!=`, `==`,
//! `&&`, and `||` require the exact second character; any other character
//! that reaches the operator scanner is consumed singly.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator.
    ///
    /// Classification has not consumed anything yet; the scanner consumes
    /// one character, or two for an exact doubled form. Never fails.
    pub(crate) fn lex_operator(&mut self) -> Result<Token<'a>, LexError> {
        let c = self.cursor.peek(0);
        match c {
            '!' | '=' if self.cursor.has(1) => {
                self.cursor.advance();
                if self.cursor.peek(0) == '=' {
                    self.cursor.advance();
                }
            },
            '&' if self.cursor.has(1) => {
                self.cursor.advance();
                if self.cursor.peek(0) == '&' {
                    self.cursor.advance();
                }
            },
            '|' if self.cursor.has(1) => {
                self.cursor.advance();
                if self.cursor.peek(0) == '|' {
                    self.cursor.advance();
                }
            },
            _ => self.cursor.advance(),
        }
        Ok(self.cursor.emit(TokenKind::Operator))
    }
}
