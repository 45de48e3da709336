//! The grammar productions, loosest binding first.
//!
//! ```text
//! expr       : KW:let IDENTIFIER EQ expr
//!            | comp-expr ((KW:and | KW:or) comp-expr)*
//! comp-expr  : arith-expr ((EE | NE | GT | LT | GTE | LTE) arith-expr)*
//! arith-expr : KW:not comp-expr
//!            | term ((PLUS | MINUS) term)*
//! term       : factor ((MUL | DIV) factor)*
//! factor     : (PLUS | MINUS) factor
//!            | power
//! power      : call (POW factor)?
//! call       : atom IDENTIFIER? (L_PAREN (expr (COMMA expr)*)? R_PAREN)?
//! atom       : INT | FLOAT | IDENTIFIER | STRING
//!            | L_PAREN expr R_PAREN | if-expr | func-def
//! if-expr    : KW:if comp-expr KW:then expr KW:else expr
//! func-def   : KW:fun IDENTIFIER? L_PAREN (IDENTIFIER (COMMA IDENTIFIER)*)? R_PAREN COLON expr
//! ```

use crate::{
    ast::{
        ast::{Node, Number},
        operators::{BinaryOperator, UnaryOperator},
    },
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind, TokenValue},
};

use super::{
    lookups::{starts_expression, BindingPower, OperandHandler},
    parser::{Parser, TrailingIdentifier},
};

const IF_EXPRESSION: &str = "if expression";

fn token_text(token: &Token) -> String {
    token.text().unwrap_or_default().to_string()
}

pub fn parse_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    if parser.current_token_kind() == TokenKind::Let {
        return parser.nested(parse_var_assign);
    }

    parse_binary_expr(parser, BindingPower::Logical, parse_comp_expr)
}

fn parse_var_assign(parser: &mut Parser) -> Result<Node, ParseError> {
    let let_span = parser.advance().span.clone();

    let name = token_text(&parser.expect(TokenKind::Identifier)?);
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser)?;

    Ok(Node::VarAssign {
        name,
        span: let_span.to(value.get_span()),
        value: Box::new(value),
    })
}

/// Left-associative chain of `operand (op operand)*` for one level.
pub fn parse_binary_expr(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandHandler,
) -> Result<Node, ParseError> {
    let mut left = operand(parser)?;

    while let Some(operator) = bp.operator_for(parser.current_token_kind()) {
        parser.advance();

        let right = operand(parser)?;

        left = Node::BinaryOp {
            operator,
            span: left.get_span().to(right.get_span()),
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

pub fn parse_comp_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    parse_binary_expr(parser, BindingPower::Relational, parse_arith_expr)
}

pub fn parse_arith_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    if parser.current_token_kind() == TokenKind::Not {
        // `not` negates a whole comparison and does not continue into `+`/`-`
        let not_span = parser.advance().span.clone();
        let operand = parser.nested(parse_comp_expr)?;

        return Ok(Node::UnaryOp {
            operator: UnaryOperator::Not,
            span: not_span.to(operand.get_span()),
            operand: Box::new(operand),
        });
    }

    parse_binary_expr(parser, BindingPower::Additive, parse_term)
}

pub fn parse_term(parser: &mut Parser) -> Result<Node, ParseError> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_factor)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Node, ParseError> {
    parser.nested(parse_signed_factor)
}

fn parse_signed_factor(parser: &mut Parser) -> Result<Node, ParseError> {
    let operator = match UnaryOperator::from_token(parser.current_token_kind()) {
        Some(operator @ (UnaryOperator::Plus | UnaryOperator::Minus)) => operator,
        _ => return parse_power(parser),
    };

    let operator_span = parser.advance().span.clone();
    let operand = parse_factor(parser)?;

    Ok(Node::UnaryOp {
        operator,
        span: operator_span.to(operand.get_span()),
        operand: Box::new(operand),
    })
}

pub fn parse_power(parser: &mut Parser) -> Result<Node, ParseError> {
    let base = parse_call(parser)?;

    if parser.current_token_kind() != TokenKind::Caret {
        return Ok(base);
    }
    parser.advance();

    // Recursing through factor makes `^` right-associative and lets the
    // exponent carry its own sign.
    let exponent = parse_factor(parser)?;

    Ok(Node::BinaryOp {
        operator: BinaryOperator::Power,
        span: base.get_span().to(exponent.get_span()),
        left: Box::new(base),
        right: Box::new(exponent),
    })
}

pub fn parse_call(parser: &mut Parser) -> Result<Node, ParseError> {
    let atom = parse_atom(parser)?;

    if parser.get_config().trailing_identifier == TrailingIdentifier::Discard
        && parser.current_token_kind() == TokenKind::Identifier
    {
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(atom);
    }
    parser.advance();

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        if !starts_expression(parser.current_token_kind()) {
            return Err(parser.error_here(ParseErrorKind::ExpectedToken {
                expected: TokenKind::CloseParen.describe().to_string(),
                found: parser.current_token().describe(),
            }));
        }

        arguments.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser)?);
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Node::Call {
        span: atom.get_span().to(&close.span),
        callee: Box::new(atom),
        arguments,
    })
}

pub fn parse_atom(parser: &mut Parser) -> Result<Node, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Int | TokenKind::Float => {
            let value = match parser.current_token().value {
                Some(TokenValue::Int(value)) => Number::Int(value),
                Some(TokenValue::Float(value)) => Number::Float(value),
                _ => return Err(parser.unexpected_token()),
            };

            Ok(Node::NumberLiteral {
                value,
                span: parser.advance().span.clone(),
            })
        }
        TokenKind::String => {
            let token = parser.advance();

            Ok(Node::StringLiteral {
                value: token_text(token),
                span: token.span.clone(),
            })
        }
        TokenKind::Identifier => {
            let token = parser.advance();

            Ok(Node::VarAccess {
                name: token_text(token),
                span: token.span.clone(),
            })
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::If => parse_if_expr(parser),
        TokenKind::Fun => parse_func_def(parser),
        _ => Err(parser.unexpected_token()),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    let open_span = parser.advance().span.clone();
    let expr = parse_expr(parser)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(expr.with_span(open_span.to(&close.span)))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    let if_span = parser.advance().span.clone();

    let condition = parse_comp_expr(parser)?;

    let missing_then = incomplete_if(parser, "then");
    parser.expect_error(TokenKind::Then, Some(missing_then))?;

    let then_branch = parse_expr(parser)?;

    let missing_else = incomplete_if(parser, "else");
    parser.expect_error(TokenKind::Else, Some(missing_else))?;

    let else_branch = parse_expr(parser)?;

    Ok(Node::Conditional {
        span: if_span.to(else_branch.get_span()),
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

fn incomplete_if(parser: &Parser, missing: &str) -> ParseError {
    parser.error_here(ParseErrorKind::IncompleteConstruct {
        construct: IF_EXPRESSION.to_string(),
        missing: missing.to_string(),
    })
}

pub fn parse_func_def(parser: &mut Parser) -> Result<Node, ParseError> {
    let fun_span = parser.advance().span.clone();

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(token_text(parser.advance()))
    } else {
        None
    };

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];

    if parser.current_token_kind() == TokenKind::Identifier {
        parameters.push(token_text(parser.advance()));

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parameters.push(token_text(&parser.expect(TokenKind::Identifier)?));
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Colon)?;

    let body = parse_expr(parser)?;

    Ok(Node::FuncDef {
        name,
        parameters,
        span: fun_span.to(body.get_span()),
        body: Box::new(body),
    })
}
