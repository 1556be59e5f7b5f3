//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the produce-next-token
//! dispatcher, and position bookkeeping shared by all scanners.

use veldc_util::span::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::lexer::identifier::is_ident_start;
use crate::token::{Token, TokenKind};

/// Lexer for Veld source code.
///
/// The lexer owns a cursor over the input and produces one token per
/// `next_token` call until the end-of-input token is returned. It retains no
/// token history and is mutated in place by every call.
///
/// # Example
///
/// ```
/// use veldc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("module m;");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Module);
/// assert_eq!(token.lexeme, "module");
/// assert_eq!((token.line, token.column), (0, 0));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (zero-based).
    pub(crate) token_start_line: u32,

    /// Column where the current token starts (zero-based).
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 0,
            token_start_column: 0,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace,
    /// then dispatches to the appropriate scanner based on the current
    /// character. At end of input it returns the end-of-input token, and
    /// keeps returning it on every further call.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for an illegal character, an unterminated
    /// string literal, or an invalid escape sequence. The cursor has
    /// advanced past the offending input, so the next call resumes scanning
    /// right after it.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        match self.cursor.current_char() {
            ',' => Ok(self.single_char(TokenKind::Comma)),
            '[' => Ok(self.single_char(TokenKind::LBracket)),
            '{' => Ok(self.single_char(TokenKind::LCurly)),
            '(' => Ok(self.single_char(TokenKind::LParen)),
            ']' => Ok(self.single_char(TokenKind::RBracket)),
            '}' => Ok(self.single_char(TokenKind::RCurly)),
            ')' => Ok(self.single_char(TokenKind::RParen)),
            ';' => Ok(self.single_char(TokenKind::Semicolon)),
            '"' => self.lex_string(),
            '/' => Ok(self.lex_slash()),
            '=' => Ok(self.lex_equals()),
            '>' => Ok(self.lex_greater()),
            '<' => Ok(self.lex_less()),
            '-' => Ok(self.lex_minus()),
            '!' => self.lex_bang(),
            '+' => Ok(self.lex_plus()),
            '*' => Ok(self.lex_star()),
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            c if c.is_ascii_digit() => Ok(self.lex_number()),
            c => {
                self.cursor.advance();
                Err(LexError::IllegalCharacter {
                    ch: c,
                    span: self.error_span(),
                })
            }
        }
    }

    /// Builds a token of `kind` spanning from the recorded token start to
    /// the current cursor position.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.token_start_line,
            self.token_start_column,
            self.cursor.slice_from(self.token_start),
        )
    }

    /// Consumes the current character and emits a single-character token.
    fn single_char(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// The span from the recorded token start to the current position.
    pub(crate) fn error_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (zero-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (zero-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the full source text being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

/// Iterates over scan results, ending after the end-of-input token.
///
/// Errors are yielded in stream order; the iterator keeps going past them,
/// matching the lexer's recovery contract.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
