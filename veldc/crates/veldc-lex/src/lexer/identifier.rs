//! Identifier and keyword scanning.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Whether `c` can start an identifier. Only letters do; an underscore on
/// its own is an illegal character.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Whether `c` can continue an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes a maximal run starting with a letter and continuing with
    /// letters, digits, or underscores, then checks the lexeme against the
    /// reserved-word table. The match is exact and case-sensitive.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        self.make_token(keyword_from_ident(text).unwrap_or(TokenKind::Ident))
    }
}
