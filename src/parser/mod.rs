//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a single expression tree. Each grammar level is one
//! function, and precedence follows from the order in which they call each
//! other:
//!
//! - `expr` handles `let` and the `and`/`or` chain
//! - comparison, arithmetic and term levels build left-associative chains
//! - `factor` and `power` handle unary signs and right-associative `^`
//! - `call` and `atom` handle calls, literals, groups, `if` and `fun`
//!
//! There is no backtracking and no error recovery: the first error ends the
//! parse.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
