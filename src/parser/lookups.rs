use crate::{
    ast::{ast::Node, operators::BinaryOperator},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// The binary operator levels of the grammar, loosest first. `^` is not
/// here: it is right-associative and handled by `parse_power`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Logical,
    Relational,
    Additive,
    Multiplicative,
}

impl BindingPower {
    pub fn operators(&self) -> &'static [BinaryOperator] {
        match self {
            BindingPower::Logical => &[BinaryOperator::And, BinaryOperator::Or],
            BindingPower::Relational => &[
                BinaryOperator::Equals,
                BinaryOperator::NotEquals,
                BinaryOperator::Greater,
                BinaryOperator::Less,
                BinaryOperator::GreaterEquals,
                BinaryOperator::LessEquals,
            ],
            BindingPower::Additive => &[BinaryOperator::Add, BinaryOperator::Subtract],
            BindingPower::Multiplicative => &[BinaryOperator::Multiply, BinaryOperator::Divide],
        }
    }

    /// The operator at this level spelled by `kind`, if any.
    pub fn operator_for(&self, kind: TokenKind) -> Option<BinaryOperator> {
        BinaryOperator::from_token(kind).filter(|operator| self.operators().contains(operator))
    }
}

/// A production parsing the operands of one binding power level.
pub type OperandHandler = fn(&mut Parser) -> Result<Node, ParseError>;

/// Whether `kind` can be the first token of an expression.
pub fn starts_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Let
            | TokenKind::Not
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::OpenParen
            | TokenKind::If
            | TokenKind::Fun
    )
}
