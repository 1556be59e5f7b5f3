//! Lexical error types.
//!
//! Errors are values, not panics: `next_token` returns
//! `Result<Token, LexError>`, and the lexer stays valid and callable after
//! any error. The cursor has already advanced past the offending input when
//! an error is returned, so repeated calls always make forward progress.

use thiserror::Error;

use veldc_util::diagnostic::{Diagnostic, DiagnosticCode};
use veldc_util::span::Span;

/// An error produced while scanning a single token.
///
/// Every variant carries the [`Span`] of the offending input. A `LexError`
/// never poisons the lexer; the caller may keep calling `next_token` to
/// resume scanning after the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no valid token class.
    #[error("illegal character '{ch}'")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
        /// Location of the character.
        span: Span,
    },

    /// A `"` was opened without a matching closing `"` before the end of
    /// the line or of the input.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Location from the opening quote to the last consumed character.
        span: Span,
    },

    /// An unrecognized `\x` sequence inside a string literal.
    #[error("invalid escape sequence '\\{ch}' in string literal")]
    InvalidEscape {
        /// The character following the backslash.
        ch: char,
        /// Location of the escape sequence.
        span: Span,
    },
}

impl LexError {
    /// The source location of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::IllegalCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. } => *span,
        }
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::IllegalCharacter { .. } => DiagnosticCode::E_LEXER_ILLEGAL_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::InvalidEscape { .. } => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
        }
    }

    /// Converts the error into a diagnostic for reporting.
    pub fn into_diagnostic(self) -> Diagnostic {
        let message = self.to_string();
        let span = self.span();
        Diagnostic::error(message, span).with_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LexError::IllegalCharacter {
            ch: '@',
            span: Span::new(0, 1, 0, 0),
        };
        assert_eq!(err.to_string(), "illegal character '@'");

        let err = LexError::UnterminatedString {
            span: Span::new(0, 1, 0, 0),
        };
        assert_eq!(err.to_string(), "unterminated string literal");

        let err = LexError::InvalidEscape {
            ch: 'q',
            span: Span::new(1, 3, 0, 1),
        };
        assert_eq!(
            err.to_string(),
            "invalid escape sequence '\\q' in string literal"
        );
    }

    #[test]
    fn test_span_accessor() {
        let span = Span::new(4, 5, 2, 0);
        let err = LexError::IllegalCharacter { ch: '#', span };
        assert_eq!(err.span(), span);
    }

    #[test]
    fn test_into_diagnostic_carries_code_and_span() {
        let span = Span::new(0, 3, 0, 0);
        let diag = LexError::UnterminatedString { span }.into_diagnostic();
        assert_eq!(diag.span, span);
        assert_eq!(
            diag.code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(diag.message, "unterminated string literal");
    }

    #[test]
    fn test_codes_match_taxonomy() {
        let span = Span::DUMMY;
        assert_eq!(
            LexError::IllegalCharacter { ch: '!', span }.code().as_str(),
            "E1001"
        );
        assert_eq!(
            LexError::UnterminatedString { span }.code().as_str(),
            "E1002"
        );
        assert_eq!(
            LexError::InvalidEscape { ch: 'z', span }.code().as_str(),
            "E1003"
        );
    }
}
