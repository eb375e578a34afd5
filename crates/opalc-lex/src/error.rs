//! Lexical error types.
//!
//! In strict mode every malformed token is fatal: the lexer stops at the
//! first offense and returns one of these errors, carrying the byte offset
//! the caller needs for diagnostics. No partial token sequence survives.

use opalc_util::{Diagnostic, Span};
use thiserror::Error;

/// An error produced while lexing in strict mode.
///
/// Each variant carries the byte offset of the first offending character;
/// presentation is left to the caller, which can use [`LexError::offset`]
/// directly or go through [`LexError::to_diagnostic`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A string or character literal reached end of input, or hit an
    /// unescaped line terminator, before its closing delimiter.
    ///
    /// The offset points at the opening delimiter when input ran out, or at
    /// the offending line terminator.
    #[error("unterminated literal at offset {offset}")]
    UnterminatedLiteral {
        /// Byte offset of the opening delimiter or offending terminator.
        offset: usize,
    },

    /// A backslash was followed by a character outside the recognized
    /// escape set `b n r t ' " \`.
    #[error("invalid escape sequence '\\{found}' at offset {offset}")]
    InvalidEscapeSequence {
        /// The character that followed the backslash.
        found: char,
        /// Byte offset of that character.
        offset: usize,
    },

    /// A character no rule accepts at this position: classification's
    /// fallback, or a raw control character inside a character literal.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of that character.
        offset: usize,
    },
}

impl LexError {
    /// Returns the byte offset of the first offending character.
    pub fn offset(&self) -> usize {
        match *self {
            LexError::UnterminatedLiteral { offset }
            | LexError::InvalidEscapeSequence { offset, .. }
            | LexError::UnexpectedCharacter { offset, .. } => offset,
        }
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use opalc_util::LineMap;
    ///
    /// let source = "\"unterminated";
    /// let err = opalc_lex::lex(source).unwrap_err();
    /// let rendered = err.to_diagnostic().render(&LineMap::new(source));
    /// assert!(rendered.starts_with("error: unterminated literal"));
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).with_span(Span::point(self.offset()));
        match self {
            LexError::InvalidEscapeSequence { .. } => {
                diag.with_help("valid escapes are \\b, \\n, \\r, \\t, \\', \\\", and \\\\")
            },
            _ => diag,
        }
    }
}
