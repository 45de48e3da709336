/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` tagged union and numeric literal values
/// - operators: Unary and binary operators and their token mapping
/// - display: S-expression rendering of nodes
pub mod ast;
pub mod display;
pub mod operators;
