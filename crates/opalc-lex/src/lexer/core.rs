//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the whitespace-skipping scan
//! loop, and token classification.

use crate::classes;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Error contract the lexer applies to malformed literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LexMode {
    /// Fail on the first malformed token with a [`LexError`] carrying the
    /// offending offset. No partial token sequence is returned.
    #[default]
    Strict,
    /// Replicate the reference lexer: malformed literals are accepted with
    /// their malformed shapes and no error is ever raised. Downstream
    /// consumers detect malformed tokens by shape.
    Compatible,
}

/// Lexer for Opal source text.
///
/// The lexer drives a [`Cursor`] over the source, skipping insignificant
/// whitespace and classifying each remaining position by one or two
/// characters of lookahead before dispatching to a per-class sub-scanner.
/// One lexer is constructed per [`Lexer::lex`] call and consumed by it.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error contract for malformed literals.
    pub(crate) mode: LexMode,
}

impl<'a> Lexer<'a> {
    /// Creates a strict-mode lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self::with_mode(source, LexMode::Strict)
    }

    /// Creates a lexer with an explicit error contract.
    pub fn with_mode(source: &'a str, mode: LexMode) -> Self {
        Self {
            cursor: Cursor::new(source),
            mode,
        }
    }

    /// Returns the lexer's error contract.
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Scans the entire source into a token sequence.
    ///
    /// Runs of spaces and tabs between tokens are discarded without
    /// producing tokens; every other character belongs to exactly one
    /// token's lexeme. In [`LexMode::Compatible`] this never returns an
    /// error.
    pub fn lex(mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        while self.cursor.has(0) {
            if classes::is_inline_whitespace(self.cursor.peek(0)) {
                self.cursor.advance();
                self.cursor.skip();
                continue;
            }
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    /// Classifies the upcoming token by lookahead and dispatches to the
    /// matching sub-scanner, producing exactly one token.
    ///
    /// Callers ensure at least one character remains. Classification itself
    /// never moves the cursor past the dispatch decision; only the chosen
    /// sub-scanner consumes the lexeme.
    pub(crate) fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        let c = self.cursor.peek(0);

        if classes::is_ident_start(c) {
            self.cursor.advance();
            return self.lex_identifier();
        }

        if c == '-' || c.is_ascii_digit() {
            if c == '0' && self.cursor.has(1) {
                if self.cursor.peek(1) == '.' {
                    // `0.` starts a decimal; the number scanner consumes
                    // the zero itself.
                    return self.lex_number();
                }
                // A `0` not followed by `.` is always its own token, so a
                // run like `007` can never lex as one integer.
                self.cursor.advance();
                return Ok(self.cursor.emit(TokenKind::Integer));
            }
            self.cursor.advance();
            return self.lex_number();
        }

        if c == '\'' && self.cursor.has(1) {
            self.cursor.advance();
            return self.lex_character();
        }

        if c == '"' {
            self.cursor.advance();
            return self.lex_string();
        }

        // Exhaustive operator catch-all: everything except letters, digits,
        // and the space character. A trailing `'` with nothing after it
        // lands here too.
        if !c.is_ascii_alphanumeric() && c != ' ' {
            return self.lex_operator();
        }

        // Only a space could reach this point, and the scan loop consumes
        // spaces before classification runs.
        match self.mode {
            LexMode::Strict => Err(LexError::UnexpectedCharacter {
                found: c,
                offset: self.cursor.index(),
            }),
            LexMode::Compatible => {
                self.cursor.advance();
                Ok(self.cursor.emit(TokenKind::Malformed))
            },
        }
    }
}
