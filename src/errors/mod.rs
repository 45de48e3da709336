//! Error types and error handling for the front end.
//!
//! This module defines the two disjoint error kinds produced while reading
//! source text, plus a wrapper for the whole pipeline:
//!
//! - `LexError` for characters and literals the lexer cannot turn into tokens
//! - `ParseError` for token sequences that do not form an expression
//! - `Error` for callers running both phases in one go
//!
//! Every error carries the source position it refers to.

pub mod errors;

#[cfg(test)]
mod tests;
