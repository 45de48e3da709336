use crate::{Position, Span};

use super::operators::{BinaryOperator, UnaryOperator};

/// Numeric literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Node Types
///
/// The closed set of syntactic forms an expression can take. Every node owns
/// its children, and its span starts at the node's leftmost token.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    NumberLiteral {
        value: Number,
        span: Span,
    },
    StringLiteral {
        value: String,
        span: Span,
    },
    VarAccess {
        name: String,
        span: Span,
    },
    /// `let name = value`
    VarAssign {
        name: String,
        value: Box<Node>,
        span: Span,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Node>,
        span: Span,
    },
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
        span: Span,
    },
    /// `if condition then then_branch else else_branch`
    Conditional {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Box<Node>,
        span: Span,
    },
    /// `fun [name] (parameters) : body`
    FuncDef {
        name: Option<String>,
        parameters: Vec<String>,
        body: Box<Node>,
        span: Span,
    },
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
        span: Span,
    },
}

impl Node {
    pub fn get_span(&self) -> &Span {
        match self {
            Node::NumberLiteral { span, .. }
            | Node::StringLiteral { span, .. }
            | Node::VarAccess { span, .. }
            | Node::VarAssign { span, .. }
            | Node::UnaryOp { span, .. }
            | Node::BinaryOp { span, .. }
            | Node::Conditional { span, .. }
            | Node::FuncDef { span, .. }
            | Node::Call { span, .. } => span,
        }
    }

    /// Position of the node's leftmost token.
    pub fn get_position(&self) -> &Position {
        &self.get_span().start
    }

    /// The same node, spanning `span` instead.
    ///
    /// Used for parenthesized expressions, whose leftmost token is the `(`.
    pub fn with_span(mut self, new_span: Span) -> Node {
        match &mut self {
            Node::NumberLiteral { span, .. }
            | Node::StringLiteral { span, .. }
            | Node::VarAccess { span, .. }
            | Node::VarAssign { span, .. }
            | Node::UnaryOp { span, .. }
            | Node::BinaryOp { span, .. }
            | Node::Conditional { span, .. }
            | Node::FuncDef { span, .. }
            | Node::Call { span, .. } => *span = new_span,
        }
        self
    }
}
