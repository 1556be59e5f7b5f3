//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and suppress
//! specific warnings.
//!
//! # Examples
//!
//! ```
//! use veldc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message.
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is a 4-digit number
/// (padded with zeros).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning).
    pub prefix: &'static str,
    /// The numeric identifier.
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    ///
    /// # Examples
    ///
    /// ```
    /// use veldc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.as_str(), "E1001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning).
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001").
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // PREDEFINED ERROR CODES (E1001-E1999: lexer)
    // =========================================================================

    /// E1001: Lexer - Illegal character
    pub const E_LEXER_ILLEGAL_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Invalid escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1003);
}

/// E1001: Lexer - Illegal character
pub const E_LEXER_ILLEGAL_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
/// E1002: Lexer - Unterminated string literal
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
/// E1003: Lexer - Invalid escape sequence
pub const E_LEXER_INVALID_ESCAPE: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_ESCAPE;
