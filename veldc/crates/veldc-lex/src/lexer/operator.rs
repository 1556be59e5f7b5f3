//! Operator scanning.
//!
//! Each lead character checks at most one character of lookahead, longest
//! match first. `!` is only valid as part of `!=`.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans `/`.
    pub(crate) fn lex_slash(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.make_token(TokenKind::Div)
    }

    /// Scans `==` or `=`.
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::EqEq)
        } else {
            self.make_token(TokenKind::Eql)
        }
    }

    /// Scans `>=` or `>`.
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Geq)
        } else {
            self.make_token(TokenKind::Gt)
        }
    }

    /// Scans `<=` or `<`.
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Leq)
        } else {
            self.make_token(TokenKind::Lt)
        }
    }

    /// Scans `-`.
    pub(crate) fn lex_minus(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.make_token(TokenKind::Minus)
    }

    /// Scans `!=`. A bare `!` starts no token and is an illegal character.
    pub(crate) fn lex_bang(&mut self) -> Result<Token<'a>, LexError> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(self.make_token(TokenKind::Neq))
        } else {
            Err(LexError::IllegalCharacter {
                ch: '!',
                span: self.error_span(),
            })
        }
    }

    /// Scans `+`.
    pub(crate) fn lex_plus(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.make_token(TokenKind::Plus)
    }

    /// Scans `*`.
    pub(crate) fn lex_star(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.make_token(TokenKind::Times)
    }
}
