//! S-expression rendering of the tree, e.g. `1 + 2 * 3` prints as
//! `(+ 1 (* 2 3))`. Spans are not printed.

use std::fmt::{Display, Formatter, Result};

use super::ast::{Node, Number};

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            // Debug keeps the decimal point on whole floats
            Number::Float(value) => write!(f, "{:?}", value),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Node::NumberLiteral { value, .. } => write!(f, "{}", value),
            Node::StringLiteral { value, .. } => write!(f, "{:?}", value),
            Node::VarAccess { name, .. } => write!(f, "{}", name),
            Node::VarAssign { name, value, .. } => write!(f, "(let {} {})", name, value),
            Node::UnaryOp {
                operator, operand, ..
            } => write!(f, "({} {})", operator, operand),
            Node::BinaryOp {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", operator, left, right),
            Node::Conditional {
                condition,
                then_branch,
                else_branch,
                ..
            } => write!(f, "(if {} {} {})", condition, then_branch, else_branch),
            Node::FuncDef {
                name,
                parameters,
                body,
                ..
            } => {
                write!(f, "(fun ")?;
                if let Some(name) = name {
                    write!(f, "{} ", name)?;
                }
                write!(f, "({}) {})", parameters.join(" "), body)
            }
            Node::Call {
                callee, arguments, ..
            } => {
                write!(f, "(call {}", callee)?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
