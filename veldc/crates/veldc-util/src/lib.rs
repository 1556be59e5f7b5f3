//! veldc-util - Foundation Types for the Veld Compiler
//!
//! This crate provides the fundamental types shared by every phase of the
//! veldc compiler infrastructure: source location tracking and diagnostic
//! reporting. It has no dependency on any other veldc crate, so external
//! tools (formatters, editors) can depend on it without pulling in the
//! compiler itself.
//!
//! # Modules
//!
//! - [`span`] - Source location tracking ([`Span`], [`FileId`])
//! - [`diagnostic`] - Error and warning reporting ([`Diagnostic`],
//!   [`Handler`], [`DiagnosticBuilder`])
//! - [`error`] - Error types for utility operations
//!
//! # Position convention
//!
//! Lines and columns are **zero-based** throughout: a token at the very
//! start of the input sits at line 0, column 0. Display layers add 1 when
//! rendering for humans.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SnippetError, SnippetResult};
pub use span::{FileId, Span};
