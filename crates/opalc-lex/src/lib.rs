//! opalc-lex - Lexical Analyzer for the Opal Programming Language
//!
//! This crate provides the lexer (tokenizer) for the Opal programming
//! language. It transforms source text into a flat sequence of classified
//! tokens that a parser consumes.
//!
//! # Overview
//!
//! The lexer is a single-pass, forward-only scanner with one or two
//! characters of lookahead and no backtracking across token boundaries.
//! A [`Cursor`] owns the scan position over the immutable source; the
//! [`Lexer`] skips insignificant whitespace, classifies the next token from
//! lookahead alone, and dispatches to a per-class sub-scanner that consumes
//! the lexeme and emits a [`Token`] carrying its kind, exact text, and
//! starting byte offset.
//!
//! Two error contracts are available (see [`LexMode`]): [`lex`] enforces
//! the strict contract, failing with a [`LexError`] at the first malformed
//! literal, while [`lex_compat`] replicates the reference lexer, which
//! accepts malformed literals with whatever shape they have.
//!
//! # Example Usage
//!
//! ```
//! use opalc_lex::{lex, TokenKind};
//!
//! let tokens = lex("total = price && -2.5").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Decimal,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classes`] - Character-class predicates
//! - [`error`] - Lexical error types
//!
//! # Token Categories
//!
//! - **Identifiers**: `@` or a letter, then letters, digits, `_`, or `-`
//! - **Integers**: `42`, `0`, `-5` (a leading `0` is always its own token)
//! - **Decimals**: `3.14`, `0.5`, `-1.38` (exactly one fractional run)
//! - **Characters**: `'a'`, `'\n'` (single-quoted, escapes `b n r t ' " \`)
//! - **Strings**: `"hello"`, `"line\n"` (double-quoted, same escape set,
//!   quotes included in the lexeme)
//! - **Operators**: `!=`, `==`, `&&`, `||`, and any other single character
//!   that is not a letter, digit, or space
//!
//! Only spaces and tabs separate tokens; newlines lex as operators.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{LexMode, Lexer};
pub use token::{Token, TokenKind};

/// Lexes the given source under the strict error contract.
///
/// Returns the full token sequence in source order, or the error for the
/// first malformed token with the byte offset of the offending character.
/// No partial sequence is returned on failure.
///
/// # Examples
///
/// ```
/// use opalc_lex::{lex, LexError};
///
/// let tokens = lex("x != 1").unwrap();
/// assert_eq!(tokens.len(), 3);
///
/// let err = lex("\"unterminated").unwrap_err();
/// assert_eq!(err, LexError::UnterminatedLiteral { offset: 0 });
/// ```
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).lex()
}

/// Lexes the given source under the compatibility contract.
///
/// Malformed literals are accepted with the reference lexer's token
/// shapes instead of failing, so every input produces a token sequence.
///
/// # Examples
///
/// ```
/// use opalc_lex::{lex_compat, TokenKind};
///
/// let tokens = lex_compat("\"unterminated");
/// assert_eq!(tokens[0].kind, TokenKind::String);
/// ```
pub fn lex_compat(source: &str) -> Vec<Token<'_>> {
    match Lexer::with_mode(source, LexMode::Compatible).lex() {
        Ok(tokens) => tokens,
        // Compatible mode has no error paths.
        Err(_) => unreachable!("compatible mode returned an error"),
    }
}
