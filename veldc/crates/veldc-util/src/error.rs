//! Core error types for veldc-util.

use thiserror::Error;

/// Error type for source snippet extraction.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// Requested line does not exist in the source text.
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// The zero-based line that was requested.
        line: usize,
        /// Number of lines the source actually has.
        max_lines: usize,
    },

    /// Span does not fit inside the source text.
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the source text in bytes.
        source_len: usize,
        /// Start byte offset of the span.
        span_start: usize,
        /// End byte offset of the span.
        span_end: usize,
    },
}

/// Result type alias for snippet extraction.
pub type SnippetResult<T> = std::result::Result<T, SnippetError>;
