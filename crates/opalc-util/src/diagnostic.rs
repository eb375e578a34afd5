//! Diagnostic reporting infrastructure.
//!
//! This module provides types for creating and formatting compiler
//! diagnostics. The core phases produce typed errors carrying only a kind
//! and an offset; converting those into human-readable messages with
//! line/column positions happens here, in the caller's hands.
//!
//! # Examples
//!
//! ```
//! use opalc_util::diagnostic::Diagnostic;
//! use opalc_util::span::{LineMap, Span};
//!
//! let source = "let x = \"oops";
//! let diag = Diagnostic::error("unterminated string literal")
//!     .with_span(Span::point(8))
//!     .with_help("add a closing double quote");
//!
//! let rendered = diag.render(&LineMap::new(source));
//! assert!(rendered.starts_with("error: unterminated string literal"));
//! assert!(rendered.contains("line 1, column 9"));
//! ```

use std::fmt;

use crate::span::{LineMap, Span};

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use opalc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents further processing.
    Error,
    /// A warning that does not prevent further processing.
    Warning,
    /// Additional information about a diagnostic.
    Note,
    /// A suggestion for fixing an issue.
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity, location, and attachments.
///
/// # Examples
///
/// ```
/// use opalc_util::diagnostic::{Diagnostic, Level};
///
/// let diag = Diagnostic::error("unexpected character");
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location, if known.
    pub span: Option<Span>,
    /// Additional notes for context.
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue.
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the given level and message.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use opalc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("something went wrong");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attaches a source span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Adds a note to the diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use opalc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("invalid escape sequence")
    ///     .with_note("escape sequences start with a backslash");
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help suggestion.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Formats the diagnostic as text, resolving the span to a line/column
    /// position through the given line map.
    pub fn render(&self, map: &LineMap) -> String {
        let mut out = format!("{}: {}", self.level, self.message);
        if let Some(span) = self.span {
            let lc = map.line_col(span.start);
            out.push_str(&format!(
                "\n --> line {}, column {} (offset {})",
                lc.line, lc.column, span.start
            ));
        }
        for note in &self.notes {
            out.push_str(&format!("\nnote: {note}"));
        }
        for help in &self.helps {
            out.push_str(&format!("\nhelp: {help}"));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
