//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use crate::error::{SnippetError, SnippetResult};
use crate::span::Span;

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// A source code snippet for display in diagnostics.
///
/// Contains the source line affected by the diagnostic, with the specific
/// range highlighted by a caret line. Line and column numbers here are
/// **one-based**: this type is display-facing, unlike [`Span`].
///
/// # Examples
///
/// ```
/// use veldc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = @;", 1, 5, 6, Some("illegal character"));
/// let rendered = snippet.format();
/// assert!(rendered.contains('^'));
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    /// The source line content.
    pub line: String,
    /// Line number (one-based).
    pub line_number: usize,
    /// Column where the issue starts (one-based).
    pub start_column: usize,
    /// Column where the issue ends (one-based, exclusive).
    pub end_column: usize,
    /// Optional label to display under the highlighted range.
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet.
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet without highlighting (point span).
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Extract a snippet for `span` out of the full source text.
    ///
    /// The zero-based span is converted to the one-based display convention.
    /// Spans reaching past the end of their line are clamped to the line.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError`] if the span does not fit inside `source` or
    /// names a line the source does not have.
    pub fn from_source(source: &str, span: Span) -> SnippetResult<Self> {
        if span.start > source.len() || span.end > source.len() {
            return Err(SnippetError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }

        let line_idx = span.line as usize;
        let line = source.lines().nth(line_idx).ok_or_else(|| {
            SnippetError::InvalidLineNumber {
                line: line_idx,
                max_lines: source.lines().count(),
            }
        })?;

        let start_column = span.column as usize + 1;
        let line_chars = line.chars().count();
        let end_column = (start_column + span.len().max(1)).min(line_chars + 2);

        Ok(Self {
            line: line.to_string(),
            line_number: line_idx + 1,
            start_column,
            end_column,
            label: None,
        })
    }

    /// Set the label for this snippet.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display.
    ///
    /// Returns a formatted string showing the source line with a caret (^)
    /// pointing to the relevant range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        // Line number and source
        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        // Caret line
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        for _ in 0..underline_start {
            result.push(' ');
        }
        for _ in 0..underline_len {
            result.push('^');
        }

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API.
///
/// # Examples
///
/// ```
/// use veldc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use veldc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("illegal character '@'")
///     .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
///     .span(Span::new(4, 5, 0, 4))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.message, "illegal character '@'");
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note for context.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet.
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the final diagnostic.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and emit it to the handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
