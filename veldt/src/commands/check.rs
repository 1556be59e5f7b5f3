//! Check command implementation.
//!
//! Lexes a source file without printing the token stream, reporting every
//! lexical error found. Exits successfully only for a clean scan.

use std::path::PathBuf;

use tracing::debug;

use veldc_lex::Lexer;
use veldc_util::diagnostic::Handler;

use crate::commands::common::{read_source, render_diagnostic};
use crate::error::{Result, VeldtError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source file to check.
    pub file: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Execute the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    debug!(file = %args.file.display(), bytes = source.len(), "checking");

    let handler = Handler::new();
    let mut tokens = 0usize;
    for result in Lexer::new(&source) {
        match result {
            Ok(_) => tokens += 1,
            Err(err) => handler.emit_diagnostic(err.into_diagnostic()),
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

    println!("{}: ok ({} tokens)", args.file.display(), tokens);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_run_check_clean_source() {
        let file = write_temp("public int x;\nx = 3;\n");
        let args = CheckArgs {
            file: file.path().to_path_buf(),
            verbose: false,
        };
        assert!(run_check(args).is_ok());
    }

    #[test]
    fn test_run_check_counts_errors() {
        let file = write_temp("\"unterminated\nx ?");
        let args = CheckArgs {
            file: file.path().to_path_buf(),
            verbose: false,
        };
        let err = run_check(args).unwrap_err();
        assert!(matches!(err, VeldtError::Lex { count: 2 }));
    }

    #[test]
    fn test_run_check_missing_file() {
        let args = CheckArgs {
            file: PathBuf::from("/nonexistent/input.veld"),
            verbose: false,
        };
        assert!(run_check(args).is_err());
    }
}
