//! Tokens command implementation.
//!
//! Runs the lexer over a source file and prints the resulting token stream.
//! Lexical errors are rendered as diagnostics on stderr and scanning
//! continues past them; the command fails at the end if any occurred.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use veldc_lex::Lexer;
use veldc_util::diagnostic::Handler;

use crate::commands::common::{read_source, render_diagnostic, OutputFormat};
use crate::error::{Result, VeldtError};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file to tokenize.
    pub file: PathBuf,
    /// Output format for the token stream.
    pub format: OutputFormat,
    /// Enable verbose output.
    pub verbose: bool,
}

/// A token row in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    line: u32,
    column: u32,
    lexeme: &'a str,
}

/// An error row in JSON output.
#[derive(Debug, Serialize)]
struct ErrorRecord {
    error: String,
    code: String,
    line: u32,
    column: u32,
}

/// Execute the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    debug!(file = %args.file.display(), bytes = source.len(), "tokenizing");

    let handler = Handler::new();
    let mut lexer = Lexer::new(&source);

    match args.format {
        OutputFormat::Text => {
            loop {
                match lexer.next_token() {
                    Ok(token) => {
                        println!("{token}");
                        if token.is_eof() {
                            break;
                        }
                    }
                    Err(err) => handler.emit_diagnostic(err.into_diagnostic()),
                }
            }
        }
        OutputFormat::Json => {
            let mut rows: Vec<serde_json::Value> = Vec::new();
            loop {
                match lexer.next_token() {
                    Ok(token) => {
                        rows.push(serde_json::to_value(TokenRecord {
                            kind: token.kind.name(),
                            line: token.line,
                            column: token.column,
                            lexeme: token.lexeme,
                        })?);
                        if token.is_eof() {
                            break;
                        }
                    }
                    Err(err) => {
                        let span = err.span();
                        rows.push(serde_json::to_value(ErrorRecord {
                            error: err.to_string(),
                            code: err.code().as_str(),
                            line: span.line,
                            column: span.column,
                        })?);
                        handler.emit_diagnostic(err.into_diagnostic());
                    }
                }
            }
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    for diag in handler.diagnostics() {
        eprint!("{}", render_diagnostic(&diag, &source, &args.file));
    }

    if handler.has_errors() {
        return Err(VeldtError::Lex {
            count: handler.error_count(),
        });
    }
    debug!("tokenization finished without errors");
    Ok(())
}
