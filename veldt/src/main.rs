//! Veldt CLI - the command-line driver for the Veld lexer.
//!
//! This is the main entry point for the veldt CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, VeldtError};

/// Veldt - a CLI driver for the Veld lexer
///
/// Veldt tokenizes Veld source files and reports lexical errors with
/// source snippets.
#[derive(Parser, Debug)]
#[command(name = "veldt")]
#[command(author = "Veld Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI driver for the Veld lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "VELDT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VELDT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "VELDT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the veldt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Scans the file and prints one token per line (or a JSON array with
    /// --format json). Lexical errors are reported on stderr and scanning
    /// continues past them; the exit status is non-zero if any occurred.
    Tokens(TokensCommand),

    /// Check a source file for lexical errors
    ///
    /// Scans the file without printing tokens and reports every lexical
    /// error found.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to tokenize
    file: PathBuf,

    /// Output format (text, json); defaults to the configured format
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to check
    file: PathBuf,
}

/// Main entry point for the veldt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| VeldtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let format_name = args.format.unwrap_or(config.format);
    let format = OutputFormat::parse(&format_name).ok_or_else(|| {
        VeldtError::Validation(format!(
            "Unknown output format '{}' (expected text or json)",
            format_name
        ))
    })?;
    run_tokens(TokensArgs {
        file: args.file,
        format,
        verbose,
    })
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool) -> Result<()> {
    run_check(CheckArgs {
        file: args.file,
        verbose,
    })
}
