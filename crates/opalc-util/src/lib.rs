//! opalc-util - Shared utilities for the Opal compiler toolchain.
//!
//! This crate provides the infrastructure pieces the compiler phases share:
//!
//! - [`span`] - Byte-offset spans and line/column conversion
//! - [`diagnostic`] - Diagnostic values and text rendering
//! - [`error`] - Typed errors for util operations
//! - [`validate`] - Standalone string-validation patterns
//!
//! # Example Usage
//!
//! ```
//! use opalc_util::{Diagnostic, LineMap, Span};
//!
//! let source = "let x = 1\nlet y =";
//! let map = LineMap::new(source);
//! let diag = Diagnostic::error("unexpected end of input").with_span(Span::point(17));
//! assert!(diag.render(&map).contains("line 2"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod validate;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, Level};
pub use error::{SpanError, SpanResult};
pub use span::{LineCol, LineMap, Span};
