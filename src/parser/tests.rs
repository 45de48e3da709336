//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Operator precedence and associativity
//! - Variable binding
//! - Conditionals
//! - Function definitions and calls
//! - The trailing identifier in calls
//! - Error reporting

use super::parser::{parse, parse_with_config, ParserConfig, TrailingIdentifier};
use crate::{
    ast::{
        ast::{Node, Number},
        operators::BinaryOperator,
    },
    errors::errors::{Diagnostic, ParseError, ParseErrorKind},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn parse_source(source: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source.to_string(), Some("test.fun".to_string())).unwrap();
    parse(tokens)
}

fn parse_rejecting(source: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source.to_string(), Some("test.fun".to_string())).unwrap();
    parse_with_config(
        tokens,
        ParserConfig {
            trailing_identifier: TrailingIdentifier::Reject,
            ..ParserConfig::default()
        },
    )
}

fn sexpr(source: &str) -> String {
    parse_source(source).unwrap().to_string()
}

fn error_kind(source: &str) -> ParseErrorKind {
    parse_source(source).unwrap_err().kind().clone()
}

fn expected(expected: &str, found: &str) -> ParseErrorKind {
    ParseErrorKind::ExpectedToken {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

fn unexpected(found: &str) -> ParseErrorKind {
    ParseErrorKind::UnexpectedToken {
        found: found.to_string(),
    }
}

fn incomplete_if(missing: &str) -> ParseErrorKind {
    ParseErrorKind::IncompleteConstruct {
        construct: "if expression".to_string(),
        missing: missing.to_string(),
    }
}

#[test]
fn test_parse_multiplication_binds_tighter_than_addition() {
    let ast = parse_source("1 + 2 * 3").unwrap();

    match ast {
        Node::BinaryOp {
            operator: BinaryOperator::Add,
            left,
            right,
            ..
        } => {
            assert!(matches!(
                *left,
                Node::NumberLiteral {
                    value: Number::Int(1),
                    ..
                }
            ));
            assert_eq!(right.to_string(), "(* 2 3)");
        }
        other => panic!("expected an addition, got {}", other),
    }
}

#[test]
fn test_parse_left_associative_chains() {
    assert_eq!(sexpr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(sexpr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr("2 * 3 / 4 * 5"), "(* (/ (* 2 3) 4) 5)");
    assert_eq!(sexpr("1 < 2 == 3 < 4"), "(< (== (< 1 2) 3) 4)");
    assert_eq!(sexpr("a and b or c"), "(or (and a b) c)");
}

#[test]
fn test_parse_power_is_right_associative() {
    assert_eq!(sexpr("2 ^ 3 ^ 2"), "(^ 2 (^ 3 2))");
    assert_eq!(sexpr("2 * 3 ^ 2"), "(* 2 (^ 3 2))");
}

#[test]
fn test_parse_unary_signs() {
    assert_eq!(sexpr("-5"), "(- 5)");
    assert_eq!(sexpr("--x"), "(- (- x))");
    assert_eq!(sexpr("+-1"), "(+ (- 1))");
    assert_eq!(sexpr("-2 ^ 2"), "(- (^ 2 2))");
    assert_eq!(sexpr("2 ^ -1"), "(^ 2 (- 1))");
    assert_eq!(sexpr("3 - -3"), "(- 3 (- 3))");
}

#[test]
fn test_parse_comparisons_and_logic() {
    assert_eq!(sexpr("a == 1 and b != 2"), "(and (== a 1) (!= b 2))");
    assert_eq!(sexpr("x >= 1 or x <= -1"), "(or (>= x 1) (<= x (- 1)))");
    assert_eq!(sexpr("1 + 2 > 3 * 4"), "(> (+ 1 2) (* 3 4))");
}

#[test]
fn test_parse_not_negates_a_comparison() {
    assert_eq!(sexpr("not 1 == 1"), "(not (== 1 1))");
    assert_eq!(sexpr("not 1 + 2"), "(not (+ 1 2))");
    assert_eq!(sexpr("not a and b"), "(and (not a) b)");
    assert_eq!(sexpr("not not x"), "(not (not x))");
    assert_eq!(sexpr("1 == not 2"), "(== 1 (not 2))");
}

#[test]
fn test_parse_not_is_not_an_operand() {
    assert_eq!(error_kind("1 + not 2"), unexpected("`not`"));
}

#[test]
fn test_parse_let() {
    assert_eq!(sexpr("let x = 1 + 2"), "(let x (+ 1 2))");
    assert_eq!(sexpr("let x = let y = 2"), "(let x (let y 2))");
    assert_eq!(sexpr("let f = fun (a) : a"), "(let f (fun (a) a))");
}

#[test]
fn test_parse_let_errors() {
    assert_eq!(error_kind("let = 1"), expected("identifier", "`=`"));
    assert_eq!(error_kind("let x 1"), expected("`=`", "integer `1`"));
    assert_eq!(error_kind("let x"), expected("`=`", "end of input"));
    assert_eq!(error_kind("let x = "), unexpected("end of input"));
}

#[test]
fn test_parse_let_node_starts_at_keyword() {
    let ast = parse_source("  let x = 1").unwrap();

    match &ast {
        Node::VarAssign { name, value, span } => {
            assert_eq!(name, "x");
            assert_eq!(span.start.offset, 2);
            assert_eq!(span.end.offset, 11);
            assert_eq!(value.get_position().offset, 10);
        }
        other => panic!("expected a let, got {}", other),
    }
}

#[test]
fn test_parse_if_expression() {
    assert_eq!(sexpr("if 1 < 2 then 3 else 4"), "(if (< 1 2) 3 4)");
    assert_eq!(
        sexpr("if a then 1 else if b then 2 else 3"),
        "(if a 1 (if b 2 3))"
    );
    assert_eq!(sexpr("if x then 1 else 2 + 3"), "(if x 1 (+ 2 3))");
    assert_eq!(sexpr("if not x then y else z"), "(if (not x) y z)");
    assert_eq!(sexpr("(if c then 1 else 2) * 10"), "(* (if c 1 2) 10)");
}

#[test]
fn test_parse_if_missing_parts() {
    assert_eq!(error_kind("if 1 < 2 then 3"), incomplete_if("else"));
    assert_eq!(error_kind("if 1 < 2 3 else 4"), incomplete_if("then"));
    assert_eq!(error_kind("if a and b then 1 else 2"), incomplete_if("then"));
    assert_eq!(error_kind("if a then 1 else"), unexpected("end of input"));
}

#[test]
fn test_parse_function_definitions() {
    assert_eq!(sexpr("fun (a, b) : a + b"), "(fun (a b) (+ a b))");
    assert_eq!(sexpr("fun () : 1"), "(fun () 1)");
    assert_eq!(sexpr("fun add (a, b) : a + b"), "(fun add (a b) (+ a b))");
    assert_eq!(
        sexpr("fun (x) : fun (y) : x * y"),
        "(fun (x) (fun (y) (* x y)))"
    );
}

#[test]
fn test_parse_function_definition_structure() {
    let ast = parse_source("fun (a, b) : a + b").unwrap();

    match ast {
        Node::FuncDef {
            name,
            parameters,
            body,
            span,
        } => {
            assert_eq!(name, None);
            assert_eq!(parameters, vec!["a".to_string(), "b".to_string()]);
            assert!(matches!(
                *body,
                Node::BinaryOp {
                    operator: BinaryOperator::Add,
                    ..
                }
            ));
            assert_eq!(span.start.offset, 0);
        }
        other => panic!("expected a function, got {}", other),
    }
}

#[test]
fn test_parse_function_definition_errors() {
    assert_eq!(error_kind("fun a b"), expected("`(`", "identifier `b`"));
    assert_eq!(error_kind("fun (a,) : a"), expected("identifier", "`)`"));
    assert_eq!(error_kind("fun (a b) : a"), expected("`)`", "identifier `b`"));
    assert_eq!(error_kind("fun (a) a"), expected("`:`", "identifier `a`"));
    assert_eq!(error_kind("fun (a) :"), unexpected("end of input"));
}

#[test]
fn test_parse_calls() {
    assert_eq!(sexpr("f(1, 2)"), "(call f 1 2)");
    assert_eq!(sexpr("f()"), "(call f)");
    assert_eq!(sexpr("f(g(x), let y = 1)"), "(call f (call g x) (let y 1))");
    assert_eq!(sexpr("(fun (x) : x)(5)"), "(call (fun (x) x) 5)");
    assert_eq!(sexpr("f(2) ^ 2"), "(^ (call f 2) 2)");
    assert_eq!(sexpr("-f(x)"), "(- (call f x))");
}

#[test]
fn test_parse_call_structure() {
    let ast = parse_source("f(1, 2)").unwrap();

    match ast {
        Node::Call {
            callee,
            arguments,
            span,
        } => {
            assert!(matches!(*callee, Node::VarAccess { ref name, .. } if name == "f"));
            assert_eq!(arguments.len(), 2);
            assert_eq!(span.start.offset, 0);
            assert_eq!(span.end.offset, 7);
        }
        other => panic!("expected a call, got {}", other),
    }
}

#[test]
fn test_parse_unterminated_call() {
    assert_eq!(error_kind("f("), expected("`)`", "end of input"));
    assert_eq!(error_kind("f(1"), expected("`)`", "end of input"));
    assert_eq!(error_kind("f(1, 2"), expected("`)`", "end of input"));
    assert_eq!(error_kind("f(,)"), expected("`)`", "`,`"));
    assert_eq!(error_kind("f(1 2)"), expected("`)`", "integer `2`"));
}

#[test]
fn test_parse_call_takes_one_argument_list() {
    assert_eq!(error_kind("f(1)(2)"), unexpected("`(`"));
}

#[test]
fn test_parse_trailing_identifier_is_discarded_by_default() {
    assert_eq!(TrailingIdentifier::DEFAULT, TrailingIdentifier::Discard);
    assert_eq!(
        ParserConfig::default().trailing_identifier,
        TrailingIdentifier::DEFAULT
    );

    assert_eq!(sexpr("f x (1)"), "(call f 1)");
    assert_eq!(sexpr("a b"), "a");
    assert_eq!(sexpr("a b + 1"), "(+ a 1)");
}

#[test]
fn test_parse_trailing_identifier_rejected() {
    let error = parse_rejecting("a b").unwrap_err();
    assert_eq!(error.kind(), &unexpected("identifier `b`"));
    assert_eq!(error.get_position().offset, 2);

    assert_eq!(
        parse_rejecting("f x (1)").unwrap_err().kind(),
        &unexpected("identifier `x`")
    );
    assert_eq!(
        parse_rejecting("f(1, 2)").unwrap().to_string(),
        "(call f 1 2)"
    );
}

#[test]
fn test_parse_grouping() {
    assert_eq!(sexpr("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(sexpr("((x))"), "x");
    assert_eq!(error_kind("(1 + 2"), expected("`)`", "end of input"));
}

#[test]
fn test_parse_literals() {
    assert_eq!(sexpr("42"), "42");
    assert_eq!(sexpr("2.50"), "2.5");
    assert_eq!(sexpr("3."), "3.0");
    assert_eq!(sexpr(r#""hi there""#), r#""hi there""#);

    match parse_source(r#""a\tb""#).unwrap() {
        Node::StringLiteral { value, .. } => assert_eq!(value, "a\tb"),
        other => panic!("expected a string, got {}", other),
    }
}

#[test]
fn test_parse_unexpected_atoms() {
    assert_eq!(error_kind(""), unexpected("end of input"));
    assert_eq!(error_kind("*"), unexpected("`*`"));
    assert_eq!(error_kind("1 +"), unexpected("end of input"));
    assert_eq!(error_kind(")"), unexpected("`)`"));
    assert_eq!(error_kind("then"), unexpected("`then`"));
}

#[test]
fn test_parse_rejects_trailing_tokens() {
    assert_eq!(error_kind("1 2"), unexpected("integer `2`"));
    assert_eq!(error_kind("1 )"), unexpected("`)`"));
    assert_eq!(error_kind("x = 1"), unexpected("`=`"));
}

#[test]
fn test_parse_error_positions() {
    let error = parse_source("f(1, 2").unwrap_err();
    assert_eq!(error.get_position().offset, 6);
    assert_eq!(error.get_position().column, 7);

    let error = parse_source("let x = 1 +\n  *").unwrap_err();
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 3);
    assert_eq!(error.get_position().file.as_str(), "test.fun");
}

#[test]
fn test_parse_node_positions_are_leftmost_tokens() {
    let ast = parse_source("x * (2 + 3)").unwrap();

    match ast {
        Node::BinaryOp {
            left, right, span, ..
        } => {
            assert_eq!(span.start.offset, 0);
            assert_eq!(left.get_position().offset, 0);
            assert_eq!(right.get_position().offset, 4);
            assert_eq!(span.end.offset, 11);
        }
        other => panic!("expected a product, got {}", other),
    }
}

#[test]
fn test_parse_grouped_operand_starts_at_paren() {
    let ast = parse_source("(a + b) * c").unwrap();
    assert_eq!(ast.get_position().offset, 0);

    match ast {
        Node::BinaryOp { left, .. } => {
            assert_eq!(left.get_position().offset, 0);
            assert_eq!(left.get_span().end.offset, 7);
        }
        other => panic!("expected a product, got {}", other),
    }

    let call = parse_source("(f)(1)").unwrap();
    assert_eq!(call.get_position().offset, 0);
    assert_eq!(call.to_string(), "(call f 1)");
}

#[test]
fn test_parse_nesting_limit() {
    let depth = ParserConfig::DEFAULT_MAX_DEPTH;

    let shallow = format!("{}1{}", "(".repeat(depth / 2), ")".repeat(depth / 2));
    assert_eq!(sexpr(&shallow), "1");

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(
        error_kind(&deep),
        ParseErrorKind::IncompleteConstruct { .. }
    ));

    let signs = format!("{}1", "-".repeat(10_000));
    assert!(matches!(
        error_kind(&signs),
        ParseErrorKind::IncompleteConstruct { .. }
    ));

    let nots = format!("{}x", "not ".repeat(10_000));
    assert!(matches!(
        error_kind(&nots),
        ParseErrorKind::IncompleteConstruct { .. }
    ));

    let lets = "let a = ".repeat(10_000) + "1";
    assert!(matches!(
        error_kind(&lets),
        ParseErrorKind::IncompleteConstruct { .. }
    ));
}

#[test]
fn test_parse_nesting_limit_is_configurable() {
    let source = format!("{}1", "-".repeat(5));
    let tokens = tokenize(source, None).unwrap();
    let config = ParserConfig {
        max_depth: 3,
        ..ParserConfig::default()
    };

    let error = parse_with_config(tokens.clone(), config).unwrap_err();
    assert_eq!(error.get_position().offset, 3);

    assert_eq!(
        parse_with_config(tokens, ParserConfig::default())
            .unwrap()
            .to_string(),
        "(- (- (- (- (- 1)))))"
    );
}

#[test]
fn test_parse_appends_missing_eof() {
    let mut tokens = tokenize("1 + 2".to_string(), None).unwrap();
    let eof = tokens.pop().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);

    assert_eq!(parse(tokens).unwrap().to_string(), "(+ 1 2)");
    assert_eq!(parse(vec![]).unwrap_err().kind(), &unexpected("end of input"));
}
