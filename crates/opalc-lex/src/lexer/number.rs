//! Integer and decimal literal lexing.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal: a digit run, optionally followed by one
    /// decimal point and a trailing digit run.
    ///
    /// Classification has already consumed a leading `-` or first digit,
    /// except on the `0.`-prefixed path where the scanner starts at the
    /// zero itself. A leading `-` is part of the lexeme, so `-5` is one
    /// INTEGER token.
    ///
    /// A dot is only consumed when a character follows it; the fractional
    /// run ends the token, so a second dot never joins the lexeme. Never
    /// fails.
    pub(crate) fn lex_number(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            let c = self.cursor.peek(0);
            if c.is_ascii_digit() {
                self.cursor.advance();
                continue;
            }
            if c == '.' && self.cursor.has(1) {
                self.cursor.advance();
                while self.cursor.peek(0).is_ascii_digit() {
                    self.cursor.advance();
                }
                return Ok(self.cursor.emit(TokenKind::Decimal));
            }
            // A trailing dot with nothing after it stays unconsumed and
            // lexes as an operator on the next loop iteration.
            break;
        }
        Ok(self.cursor.emit(TokenKind::Integer))
    }
}
