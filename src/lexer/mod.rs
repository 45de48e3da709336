//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, numbers, strings and operators
//! - Line, column and offset tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
