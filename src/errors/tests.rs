//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{
    Diagnostic, Error, ErrorTip, LexError, LexErrorKind, ParseError, ParseErrorKind,
};
use crate::Position;
use std::sync::Arc;

fn position(offset: u32) -> Position {
    Position::new(offset, 1, offset + 1, Arc::new("test.fun".to_string()))
}

#[test]
fn test_lex_error_creation() {
    let error = LexError::new(LexErrorKind::UnknownCharacter { character: '@' }, position(10));

    assert_eq!(error.get_error_name(), "UnknownCharacter");
    assert_eq!(error.get_position().offset, 10);
}

#[test]
fn test_malformed_number_error() {
    let error = LexError::new(
        LexErrorKind::MalformedNumber {
            text: "1.2.3".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert!(error.get_tip().to_string().contains("`1.2.3`"));
}

#[test]
fn test_lone_bang_has_dedicated_tip() {
    let error = LexError::new(LexErrorKind::UnknownCharacter { character: '!' }, position(0));

    assert!(error.get_tip().to_string().contains("`not`"));
}

#[test]
fn test_unterminated_string_error() {
    let error = LexError::new(LexErrorKind::UnterminatedString, position(4));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.kind(), &LexErrorKind::UnterminatedString);
}

#[test]
fn test_expected_token_error() {
    let error = ParseError::new(
        ParseErrorKind::ExpectedToken {
            expected: "`)`".to_string(),
            found: "end of input".to_string(),
        },
        position(2),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "expected `)`, found end of input"
    );
}

#[test]
fn test_unexpected_token_error() {
    let error = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            found: "`*`".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_incomplete_construct_error() {
    let error = ParseError::new(
        ParseErrorKind::IncompleteConstruct {
            construct: "if expression".to_string(),
            missing: "else".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "IncompleteConstruct");
    assert_eq!(
        error.get_tip().to_string(),
        "the if expression is missing its `else` part"
    );
}

#[test]
fn test_error_display_includes_position() {
    let error = LexError::new(LexErrorKind::UnknownCharacter { character: '$' }, position(3));

    assert_eq!(error.to_string(), "unknown character '$' at test.fun:1:4");
}

#[test]
fn test_pipeline_error_delegates() {
    let error: Error = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            found: "`)`".to_string(),
        },
        position(7),
    )
    .into();

    assert!(matches!(error, Error::Parse(_)));
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().offset, 7);
    assert_eq!(error.to_string(), "unexpected token: `)` at test.fun:1:8");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let none = ErrorTip::None;
    assert_eq!(none.to_string(), "");
}
