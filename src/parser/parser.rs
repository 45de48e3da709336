//! Parser state and the parsing entry points.
//!
//! The parser owns the token stream and a cursor into it. It looks at one
//! token at a time and never moves backwards; the grammar productions in
//! `expr` drive it through `current_token`, `advance` and `expect`.

use crate::{
    ast::ast::Node,
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::expr::parse_expr;

/// What `call` does with a bare identifier directly after its atom.
///
/// The grammar reads `call : atom IDENTIFIER? ("(" args ")")?` but gives the
/// identifier no meaning, so the choice is explicit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingIdentifier {
    /// Consume the identifier and drop it: `f x (1)` parses as `f(1)`.
    #[default]
    Discard,
    /// Leave the identifier in the stream, where the next production
    /// reports it as unexpected.
    Reject,
}

impl TrailingIdentifier {
    pub const DEFAULT: TrailingIdentifier = TrailingIdentifier::Discard;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub trailing_identifier: TrailingIdentifier,
    /// How many levels of nested sub-expressions (groups, unary signs,
    /// exponents, `not`, `let`) are allowed before the parse is abandoned.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            trailing_identifier: TrailingIdentifier::DEFAULT,
            max_depth: ParserConfig::DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting depth, bounded by `config.max_depth`
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that does not end in `EOF` gets one appended at the end of
    /// its last token.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                None,
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            config,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor stays on `EOF` once it gets there.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token, or `error` (an `ExpectedToken` error when
    /// `None`) without advancing.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<ParseError>,
    ) -> Result<Token, ParseError> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.error_here(ParseErrorKind::ExpectedToken {
                    expected: expected_kind.describe().to_string(),
                    found: self.current_token().describe(),
                })),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an error located at the current token.
    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.get_position())
    }

    pub fn unexpected_token(&self) -> ParseError {
        self.error_here(ParseErrorKind::UnexpectedToken {
            found: self.current_token().describe(),
        })
    }

    /// Runs `production` one nesting level deeper.
    ///
    /// Fails with `IncompleteConstruct` at the current token once the
    /// configured depth is exceeded.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(self.error_here(ParseErrorKind::IncompleteConstruct {
                construct: String::from("expression"),
                missing: format!("end of nesting within {} levels", self.config.max_depth),
            }));
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    pub fn get_config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a token stream into a single expression.
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    parse_with_config(tokens, ParserConfig::default())
}

/// Parses a token stream into a single expression, rejecting anything left
/// over after it.
pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens, config);

    let root = parse_expr(&mut parser)?;

    if parser.current_token_kind() != TokenKind::EOF {
        return Err(parser.unexpected_token());
    }

    Ok(root)
}
