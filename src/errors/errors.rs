use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Shared surface of every error the front end reports, used when
/// rendering diagnostics.
pub trait Diagnostic {
    fn get_position(&self) -> &Position;
    fn get_error_name(&self) -> &str;
    fn get_tip(&self) -> ErrorTip;
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    #[error("unknown character {character:?}")]
    UnknownCharacter { character: char },
    #[error("malformed number literal {text:?}")]
    MalformedNumber { text: String },
    #[error("unterminated string literal")]
    UnterminatedString,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct LexError {
    internal_error: LexErrorKind,
    position: Position,
}

impl LexError {
    pub fn new(error_impl: LexErrorKind, position: Position) -> Self {
        LexError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.internal_error
    }
}

impl Diagnostic for LexError {
    fn get_position(&self) -> &Position {
        &self.position
    }

    fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexErrorKind::UnknownCharacter { .. } => "UnknownCharacter",
            LexErrorKind::MalformedNumber { .. } => "MalformedNumber",
            LexErrorKind::UnterminatedString => "UnterminatedString",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexErrorKind::UnknownCharacter { character: '!' } => ErrorTip::Suggestion(
                String::from("Unknown character: `!`, use `not` for negation or `!=` to compare"),
            ),
            LexErrorKind::UnknownCharacter { character } => {
                ErrorTip::Suggestion(format!("Unknown character: `{}`", character))
            }
            LexErrorKind::MalformedNumber { text } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number takes at most one `.` and must fit in 64 bits",
                text
            )),
            LexErrorKind::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected token: {found}")]
    UnexpectedToken { found: String },
    #[error("incomplete {construct}: missing {missing}")]
    IncompleteConstruct { construct: String, missing: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct ParseError {
    internal_error: ParseErrorKind,
    position: Position,
}

impl ParseError {
    pub fn new(error_impl: ParseErrorKind, position: Position) -> Self {
        ParseError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.internal_error
    }
}

impl Diagnostic for ParseError {
    fn get_position(&self) -> &Position {
        &self.position
    }

    fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ParseErrorKind::ExpectedToken { .. } => "ExpectedToken",
            ParseErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorKind::IncompleteConstruct { .. } => "IncompleteConstruct",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ParseErrorKind::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ParseErrorKind::UnexpectedToken { found } => {
                ErrorTip::Suggestion(format!("Unexpected token: {}", found))
            }
            ParseErrorKind::IncompleteConstruct { construct, missing } => ErrorTip::Suggestion(
                format!("the {} is missing its `{}` part", construct, missing),
            ),
        }
    }
}

/// Any failure of the tokenize-then-parse pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Diagnostic for Error {
    fn get_position(&self) -> &Position {
        match self {
            Error::Lex(error) => error.get_position(),
            Error::Parse(error) => error.get_position(),
        }
    }

    fn get_error_name(&self) -> &str {
        match self {
            Error::Lex(error) => error.get_error_name(),
            Error::Parse(error) => error.get_error_name(),
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lex(error) => error.get_tip(),
            Error::Parse(error) => error.get_tip(),
        }
    }
}
