//! veldc-lex - Lexical Analyzer for the Veld Programming Language
//!
//! This crate provides the lexer (tokenizer) for the Veld programming
//! language. It transforms source text into a stream of tokens carrying
//! source-position metadata, consumed one at a time by the parser.
//!
//! # Overview
//!
//! The lexer is pull-based: the caller invokes [`Lexer::next_token`]
//! repeatedly until the end-of-input token is returned. There is no token
//! buffer; each call produces one fresh token and advances the scan cursor.
//! Lexical errors are returned as values ([`LexError`]) and never poison the
//! lexer: the cursor always advances past the offending input, so the caller
//! can keep scanning.
//!
//! # Example Usage
//!
//! ```
//! use veldc_lex::{Lexer, TokenKind};
//!
//! let source = "while x1 >= 10 { }";
//! let mut lexer = Lexer::new(source);
//!
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, TokenKind::While);
//!
//! // Or iterate, stopping at end of input:
//! let kinds: Vec<_> = Lexer::new(source)
//!     .map(|result| result.unwrap().kind)
//!     .collect();
//! assert_eq!(kinds.len(), 6);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the reserved-word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error values
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words with special meaning (14 total):
//! `boolean`, `break`, `else`, `false`, `if`, `import`, `int`, `module`,
//! `public`, `return`, `true`, `type`, `void`, `while`
//!
//! ## Identifiers
//!
//! A letter followed by letters, digits, or underscores:
//! `[a-zA-Z][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: a run of decimal digits; `-10` is two tokens
//! - **String**: `"..."`; the lexeme is the raw interior text with escape
//!   sequences left unexpanded
//!
//! ## Operators
//!
//! `/`, `==`, `=`, `>=`, `>`, `<=`, `<`, `-`, `!=`, `+`, `*`
//!
//! ## Punctuation
//!
//! `,`, `[`, `{`, `(`, `]`, `}`, `)`, `;`
//!
//! ## Special
//!
//! - **EOF**: end-of-input marker, produced last and then repeated

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
