//! Error handling module for the veldt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the veldt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of veldt commands.
#[derive(Error, Debug)]
pub enum VeldtError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The scanned input contained lexical errors.
    ///
    /// The diagnostics themselves have already been rendered; this variant
    /// only drives the process exit status.
    #[error("found {count} lexical error(s)")]
    Lex {
        /// Number of lexical errors reported.
        count: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using VeldtError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, VeldtError>;
