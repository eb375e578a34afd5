//! Core error types for opalc-util.
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span and line-map operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// Offset lies past the end of the source.
    #[error("offset out of bounds: offset {offset}, source length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },
}

/// Result type alias for span operations.
pub type SpanResult<T> = std::result::Result<T, SpanError>;
