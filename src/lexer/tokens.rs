use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("fun", TokenKind::Fun);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Float,
    String,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Comma,
    Colon,

    Plus,
    Dash,
    Star,
    Slash,
    Caret,

    // Reserved
    Let,
    And,
    Or,
    Not,
    If,
    Then,
    Else,
    Fun,
}

impl TokenKind {
    /// How the kind reads in an error message.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Assignment => "`=`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Caret => "`^`",
            TokenKind::Let => "`let`",
            TokenKind::And => "`and`",
            TokenKind::Or => "`or`",
            TokenKind::Not => "`not`",
            TokenKind::If => "`if`",
            TokenKind::Then => "`then`",
            TokenKind::Else => "`else`",
            TokenKind::Fun => "`fun`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Literal payload of a token. Keywords, operators and `EOF` have none.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    /// Identifier name or decoded string contents.
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Text(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    /// Name or contents carried by identifier and string tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// How the token reads in an error message, e.g. ``identifier `foo` ``.
    pub fn describe(&self) -> String {
        match (&self.kind, &self.value) {
            (TokenKind::String, Some(value)) => format!("string {:?}", value.to_string()),
            (kind, Some(value)) => format!("{} `{}`", kind.describe(), value),
            (kind, None) => kind.describe().to_string(),
        }
    }
}
