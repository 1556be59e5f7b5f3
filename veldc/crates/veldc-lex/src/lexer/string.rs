//! String literal scanning.
//!
//! String lexemes are the raw interior text between the quotes: escape
//! sequences are validated but left unexpanded, so `"\n"` produces a
//! two-character lexeme. Expansion, if wanted, belongs to a later phase.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;
use veldc_util::span::Span;

/// The recognized single-character escapes.
fn is_recognized_escape(c: char) -> bool {
    matches!(c, 'n' | 't' | 'r' | '\\' | '"')
}

impl<'a> Lexer<'a> {
    /// Scans a string literal.
    ///
    /// On success the token's lexeme is the text strictly between the
    /// quotes. A line terminator or end of input before the closing `"` is
    /// an unterminated-string error; an unrecognized escape is an
    /// invalid-escape error. Either way the cursor is left just past the
    /// consumed prefix, so the next call resumes scanning there.
    pub(crate) fn lex_string(&mut self) -> Result<Token<'a>, LexError> {
        self.cursor.advance(); // opening quote

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    span: self.error_span(),
                });
            }

            match self.cursor.current_char() {
                '"' => {
                    let interior = self.cursor.slice_from(self.token_start + 1);
                    self.cursor.advance();
                    return Ok(Token::new(
                        TokenKind::StringLiteral,
                        self.token_start_line,
                        self.token_start_column,
                        interior,
                    ));
                }
                '\n' => {
                    // Not consumed: the newline is ordinary whitespace for
                    // the next call.
                    return Err(LexError::UnterminatedString {
                        span: self.error_span(),
                    });
                }
                '\\' => {
                    let esc_start = self.cursor.position();
                    let esc_line = self.cursor.line();
                    let esc_column = self.cursor.column();
                    self.cursor.advance(); // backslash

                    let c = self.cursor.current_char();
                    if self.cursor.is_at_end() || c == '\n' {
                        return Err(LexError::UnterminatedString {
                            span: self.error_span(),
                        });
                    }

                    self.cursor.advance(); // escape character, valid or not
                    if !is_recognized_escape(c) {
                        return Err(LexError::InvalidEscape {
                            ch: c,
                            span: Span::new(
                                esc_start,
                                self.cursor.position(),
                                esc_line,
                                esc_column,
                            ),
                        });
                    }
                }
                _ => self.cursor.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, TokenKind};

    #[test]
    fn test_simple_string() {
        let mut lexer = Lexer::new("\"asd\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "asd");
        assert_eq!((token.line, token.column), (0, 0));
        let eof = lexer.next_token().unwrap();
        assert_eq!((eof.kind, eof.column), (TokenKind::Eof, 5));
    }

    #[test]
    fn test_empty_string() {
        let mut lexer = Lexer::new("\"\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "");
    }

    #[test]
    fn test_escape_kept_raw_in_lexeme() {
        let mut lexer = Lexer::new("\"\\n\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "\\n");
        assert_eq!(token.lexeme.len(), 2);
        let eof = lexer.next_token().unwrap();
        assert_eq!((eof.kind, eof.column), (TokenKind::Eof, 4));
    }

    #[test]
    fn test_all_recognized_escapes() {
        let mut lexer = Lexer::new("\"a\\nb\\tc\\rd\\\\e\\\"f\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "a\\nb\\tc\\rd\\\\e\\\"f");
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let mut lexer = Lexer::new("\"\\\"\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.lexeme, "\\\"");
    }

    #[test]
    fn test_unterminated_at_end_of_input() {
        // A lone quote: the error consumes exactly the quote, and the next
        // call finds EOF right after it.
        let mut lexer = Lexer::new("\"");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        let eof = lexer.next_token().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!((eof.line, eof.column), (0, 1));
    }

    #[test]
    fn test_stray_quote_after_string() {
        // `"""` is an empty string followed by an unterminated quote.
        let mut lexer = Lexer::new("\"\"\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "");

        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        assert_eq!(err.span().column, 2);

        let eof = lexer.next_token().unwrap();
        assert_eq!((eof.line, eof.column), (0, 3));
    }

    #[test]
    fn test_unterminated_at_newline_recovers_on_next_line() {
        let mut lexer = Lexer::new("\"abc\ndef");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        assert_eq!(err.span().column, 0);

        // A well-formed token later in the stream is still found correctly.
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.lexeme, "def");
        assert_eq!((token.line, token.column), (1, 0));
    }

    #[test]
    fn test_invalid_escape() {
        let mut lexer = Lexer::new("\"a\\qb\"");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::InvalidEscape { ch: 'q', .. }));
        // The escape sequence starts at the backslash.
        assert_eq!(err.span().column, 2);
    }

    #[test]
    fn test_invalid_escape_consumes_only_the_malformed_prefix() {
        let mut lexer = Lexer::new("\"\\q\" x");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::InvalidEscape { .. }));

        // Scanning resumes right after the bad escape: the closing quote
        // opens a new (unterminated) string, then `x` would be inside it.
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        let eof = lexer.next_token().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
    }

    #[test]
    fn test_backslash_at_end_of_input() {
        let mut lexer = Lexer::new("\"ab\\");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_string_position_tracking() {
        let mut lexer = Lexer::new("x \"hi\" y");
        lexer.next_token().unwrap();
        let string = lexer.next_token().unwrap();
        assert_eq!((string.line, string.column), (0, 2));
        let y = lexer.next_token().unwrap();
        assert_eq!((y.line, y.column), (0, 7));
    }
}
