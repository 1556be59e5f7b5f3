//! Common types and utilities for veldt commands.
//!
//! This module provides shared types and utility functions used across all
//! command implementations to ensure consistency.

use std::path::Path;

use veldc_util::diagnostic::{Diagnostic, SourceSnippet};

use crate::error::{Result, VeldtError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One token per line, human readable.
    #[default]
    Text,
    /// A JSON array of token and error records.
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// The canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Source Loading
// ============================================================================

/// Read a source file into memory, validating it first.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(VeldtError::FileOperation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(VeldtError::FileOperation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

// ============================================================================
// Diagnostic Rendering
// ============================================================================

/// Render a diagnostic the way the driver prints it:
///
/// ```text
/// error[E1002]: unterminated string literal
///   --> demo.veld:1:5
///   1 | x = "abc
///     |     ^^^^
/// ```
///
/// Positions are converted to the one-based convention for display. The
/// snippet line is omitted when the span does not map back into the source
/// (for example an error at end of input).
pub fn render_diagnostic(diag: &Diagnostic, source: &str, path: &Path) -> String {
    let mut out = String::new();

    match diag.code {
        Some(code) => out.push_str(&format!("{}[{}]: {}\n", diag.level, code.as_str(), diag.message)),
        None => out.push_str(&format!("{}: {}\n", diag.level, diag.message)),
    }

    out.push_str(&format!(
        "  --> {}:{}:{}\n",
        path.display(),
        diag.span.line + 1,
        diag.span.column + 1
    ));

    if let Ok(snippet) = SourceSnippet::from_source(source, diag.span) {
        out.push_str(&snippet.format());
        out.push('\n');
    }

    for note in &diag.notes {
        out.push_str(&format!("  note: {}\n", note));
    }
    for help in &diag.helps {
        out.push_str(&format!("  help: {}\n", help));
    }

    out
}
