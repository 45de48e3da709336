#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::{
    ast::ast::Node,
    errors::errors::{Diagnostic, Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and the column
/// is counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Arc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Arc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 1, 1, Arc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span running from the start of `self` to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Tokenizes and parses `source` as a single expression.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Node, Error> {
    parse_source_with_config(source, file, ParserConfig::default())
}

pub fn parse_source_with_config(
    source: &str,
    file: Option<String>,
    config: ParserConfig,
) -> Result<Node, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    Ok(parse_with_config(tokens, config)?)
}

/// Returns the 1-based line number, the text of the line (without its line
/// break) and the byte offset of `position` within that line.
///
/// Offsets at or past the end of the source resolve to the end of the last
/// line, which is where the `EOF` token sits.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let text = line.trim_end_matches(['\n', '\r']);
            return (line_number, text.to_string(), (pos - start).min(text.len()));
        }

        start = end;
        line_number += 1;
    }

    // Only reachable when `pos` is the end of the source.
    if source.is_empty() || source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    let last = source.rsplit('\n').next().unwrap_or_default();
    (line_number - 1, last.to_string(), last.len())
}

/// Renders an error against the source it came from:
///
/// ```text
/// Error: ExpectedToken (expected `)`, found end of input)
/// -> shell:1:3
///   |
/// 1 | f(
///   | --^
/// ```
pub fn render_error(error: &dyn Diagnostic, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let caret_at = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = caret_at.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Prints a rendered error to stderr.
pub fn display_error(error: &dyn Diagnostic, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
