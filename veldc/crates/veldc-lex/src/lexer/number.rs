//! Integer literal scanning.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a decimal integer literal.
    ///
    /// Consumes a maximal run of decimal digits. A leading `-` is never part
    /// of the literal (`-10` is MINUS then INT_LITERAL), and a letter
    /// immediately after the digits terminates the literal and starts a new
    /// identifier token (`123a` is INT_LITERAL then ID).
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        self.make_token(TokenKind::IntLiteral)
    }
}
