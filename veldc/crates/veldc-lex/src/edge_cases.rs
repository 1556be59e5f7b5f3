//! Edge case and property tests for veldc-lex.
