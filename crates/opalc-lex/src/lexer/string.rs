//! String and character literal lexing.
//!
//! Both literal forms come in two variants selected by the lexer's mode:
//! the strict variants enforce the documented contract (unterminated
//! literals and invalid escapes are fatal), while the compatible variants
//! replicate the reference behavior, which accepts malformed literals with
//! whatever shape they have and leaves detection to downstream consumers.

use crate::classes::{is_escape, is_literal_control};
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::{LexMode, Lexer};

impl<'a> Lexer<'a> {
    /// Lexes a string literal. The opening quote has already been consumed
    /// by classification; the emitted lexeme includes both quotes.
    pub(crate) fn lex_string(&mut self) -> Result<Token<'a>, LexError> {
        match self.mode {
            LexMode::Strict => self.lex_string_strict(),
            LexMode::Compatible => self.lex_string_compat(),
        }
    }

    fn lex_string_strict(&mut self) -> Result<Token<'a>, LexError> {
        let open = self.cursor.start();
        loop {
            if !self.cursor.has(0) {
                return Err(LexError::UnterminatedLiteral { offset: open });
            }
            match self.cursor.peek(0) {
                '"' => {
                    self.cursor.advance();
                    return Ok(self.cursor.emit(TokenKind::String));
                },
                '\n' | '\r' => {
                    return Err(LexError::UnterminatedLiteral {
                        offset: self.cursor.index(),
                    });
                },
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.has(0) {
                        return Err(LexError::UnterminatedLiteral { offset: open });
                    }
                    let escape = self.cursor.peek(0);
                    if !is_escape(escape) {
                        return Err(LexError::InvalidEscapeSequence {
                            found: escape,
                            offset: self.cursor.index(),
                        });
                    }
                    self.cursor.advance();
                },
                _ => self.cursor.advance(),
            }
        }
    }

    fn lex_string_compat(&mut self) -> Result<Token<'a>, LexError> {
        while self.cursor.has(0) {
            if self.cursor.peek(0) == '\\' {
                self.cursor.advance();
                if is_escape(self.cursor.peek(0)) {
                    self.cursor.advance();
                } else {
                    // Invalid escape: stop with what has accumulated, the
                    // offending character excluded.
                    return Ok(self.cursor.emit(TokenKind::String));
                }
            }
            if self.cursor.peek(0) == '"' {
                self.cursor.advance();
                return Ok(self.cursor.emit(TokenKind::String));
            }
            if !self.cursor.has(1) {
                // Forced termination at end of input; the final character
                // stays unconsumed and lexes on the next loop iteration.
                return Ok(self.cursor.emit(TokenKind::String));
            }
            self.cursor.advance();
        }
        Ok(self.cursor.emit(TokenKind::String))
    }

    /// Lexes a character literal. The opening quote has already been
    /// consumed by classification, which also guaranteed one more
    /// character exists.
    pub(crate) fn lex_character(&mut self) -> Result<Token<'a>, LexError> {
        match self.mode {
            LexMode::Strict => self.lex_character_strict(),
            LexMode::Compatible => self.lex_character_compat(),
        }
    }

    fn lex_character_strict(&mut self) -> Result<Token<'a>, LexError> {
        let open = self.cursor.start();
        match self.cursor.peek(0) {
            '\\' => {
                self.cursor.advance();
                if !self.cursor.has(0) {
                    return Err(LexError::UnterminatedLiteral { offset: open });
                }
                let escape = self.cursor.peek(0);
                if !is_escape(escape) {
                    return Err(LexError::InvalidEscapeSequence {
                        found: escape,
                        offset: self.cursor.index(),
                    });
                }
                self.cursor.advance();
            },
            '\'' => {
                // Empty literal: the grammar requires exactly one
                // character between the quotes.
                return Err(LexError::UnexpectedCharacter {
                    found: '\'',
                    offset: self.cursor.index(),
                });
            },
            '\n' | '\r' => {
                return Err(LexError::UnterminatedLiteral {
                    offset: self.cursor.index(),
                });
            },
            c if is_literal_control(c) => {
                return Err(LexError::UnexpectedCharacter {
                    found: c,
                    offset: self.cursor.index(),
                });
            },
            _ => self.cursor.advance(),
        }
        if self.cursor.peek(0) != '\'' {
            return Err(LexError::UnterminatedLiteral { offset: open });
        }
        self.cursor.advance();
        Ok(self.cursor.emit(TokenKind::Character))
    }

    fn lex_character_compat(&mut self) -> Result<Token<'a>, LexError> {
        if !self.cursor.has(1) {
            // Only the opening quote is pending: a degenerate one-character
            // literal at the end of input.
            return Ok(self.cursor.emit(TokenKind::Character));
        }
        if self.cursor.peek(0) == '\\' {
            self.cursor.advance();
            if is_escape(self.cursor.peek(0)) {
                self.cursor.advance();
            }
            if self.cursor.peek(0) == '\'' {
                self.cursor.advance();
            }
            return Ok(self.cursor.emit(TokenKind::Character));
        }
        if is_literal_control(self.cursor.peek(0)) {
            self.cursor.advance();
        } else if self.cursor.peek(0) != '\'' && self.cursor.has(1) {
            self.cursor.advance();
        }
        if self.cursor.peek(0) == '\'' {
            self.cursor.advance();
        }
        Ok(self.cursor.emit(TokenKind::Character))
    }
}
