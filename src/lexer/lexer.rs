use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{LexError, LexErrorKind},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), LexError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order at the current offset; every pattern is anchored, and
    // longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^(?:[0-9]|\.[0-9])[0-9.]*", number_handler),
        RegexPattern::new(r#"(?s)^"(?:[^"\\]|\\.)*""#, string_handler),
        RegexPattern::new(r#"^""#, unterminated_string_handler),
        RegexPattern::new(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        RegexPattern::new(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        RegexPattern::new(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new(r"^\^", MK_DEFAULT_HANDLER!(TokenKind::Caret)),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    /// Moves past `n` bytes of source, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos as u32, self.line, self.column, Arc::clone(&self.file))
    }

    fn push_literal(&mut self, kind: TokenKind, value: TokenValue, len: usize) {
        let start = self.position();
        self.advance_n(len);
        let span = Span {
            start,
            end: self.position(),
        };
        self.push(MK_TOKEN!(kind, Some(value), span));
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    let position = lexer.position();
    let malformed = || {
        LexError::new(
            LexErrorKind::MalformedNumber {
                text: matched.to_string(),
            },
            position.clone(),
        )
    };

    match matched.matches('.').count() {
        0 => {
            let value = matched.parse::<i64>().map_err(|_| malformed())?;
            lexer.push_literal(TokenKind::Int, TokenValue::Int(value), matched.len());
        }
        1 => {
            let value = matched.parse::<f64>().map_err(|_| malformed())?;
            if !value.is_finite() {
                return Err(malformed());
            }
            lexer.push_literal(TokenKind::Float, TokenValue::Float(value), matched.len());
        }
        _ => return Err(malformed()),
    }

    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    let string_literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.peek() {
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            } else {
                result.push(ch);
            }
        } else {
            result.push(ch);
        }
    }

    lexer.push_literal(TokenKind::String, TokenValue::Text(result), matched.len());
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), LexError> {
    Err(LexError::new(
        LexErrorKind::UnterminatedString,
        lexer.position(),
    ))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    let start = lexer.position();
    lexer.advance_n(matched.len());
    let span = Span {
        start,
        end: lexer.position(),
    };

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, None, span));
    } else {
        lexer.push(MK_TOKEN!(
            TokenKind::Identifier,
            Some(TokenValue::Text(matched.to_string())),
            span
        ));
    }

    Ok(())
}

/// Turns source text into tokens, ending with a single `EOF` token.
///
/// `file` names the source in positions; it defaults to `"shell"`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.as_str().to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched)?,
            None => {
                return Err(LexError::new(
                    LexErrorKind::UnknownCharacter {
                        character: lex.at(),
                    },
                    lex.position(),
                ))
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        None,
        Span {
            start: end.clone(),
            end
        }
    ));
    Ok(lex.tokens)
}
