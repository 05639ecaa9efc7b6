//! Text frontend for JLispy
//!
//! Turns source text into the generic [`ParseNode`] tree that the reader
//! consumes:
//!
//! ```text
//! Source Code → [Frontend] → ParseNode → [Reader] → Value → [Evaluator] → Value
//! ```
//!
//! The grammar lives in `grammar.pest`. Every top-level expression becomes a
//! child of a root node tagged [`ROOT_TAG`], followed by the end-of-input
//! anchor.

use std::fmt;

use pest::error::{Error as PestError, LineColLocation};
use pest::iterators::Pair;
use pest::Parser;

use crate::node::{ParseNode, DELIMITER_TAG, RAW_TAG, ROOT_TAG};

// ═══════════════════════════════════════════════════════════════════════
// Grammar Mismatches
// ═══════════════════════════════════════════════════════════════════════

/// Input that does not match the grammar.
///
/// Every mismatch is located: pest always reports the position where the
/// grammar stopped matching, and the offending line is kept so the error can
/// point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What the grammar expected at the failure point
    pub message: String,

    /// Where the mismatch starts
    pub location: SourceLocation,

    /// The input line containing `location`, without its terminator
    pub source_line: String,
}

impl ParseError {
    /// Create a parse error for `location` within `source_line`.
    pub fn new(
        message: impl Into<String>,
        location: SourceLocation,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            source_line: source_line.into(),
        }
    }

    fn from_pest(err: PestError<Rule>, source_name: &str) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(pos) => pos,
            LineColLocation::Span(start, _) => start,
        };
        Self::new(
            err.variant.message(),
            SourceLocation::new(source_name, line, column),
            err.line().trim_end_matches(['\r', '\n']),
        )
    }

    /// The offending line with a caret under the failing column.
    ///
    /// Tabs before the column are kept so the caret lines up in a terminal.
    pub fn snippet(&self) -> String {
        let pad: String = self
            .source_line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(self.location.column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{}\n{}^", self.source_line, pad)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error: {} at {}\n{}",
            self.message,
            self.location,
            self.snippet()
        )
    }
}

impl std::error::Error for ParseError {}

/// A 1-indexed position in a named input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// `<stdin>`, `<test>` or a file path
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column in characters (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PARSER
// ═══════════════════════════════════════════════════════════════════════

mod grammar {
    #[derive(pest_derive::Parser)]
    #[grammar = "grammar.pest"]
    pub(super) struct JlispyParser;
}

use grammar::{JlispyParser, Rule};

/// Parse source text into a tree rooted at a [`ROOT_TAG`] node.
///
/// `source_name` is only used for error locations (`<stdin>`, a file path).
///
/// # Errors
///
/// Returns `ParseError` if the text does not match the grammar.
pub fn parse(source: &str, source_name: &str) -> Result<ParseNode, ParseError> {
    let mut pairs = JlispyParser::parse(Rule::program, source)
        .map_err(|err| ParseError::from_pest(err, source_name))?;

    Ok(pairs
        .next()
        .map(to_node)
        .unwrap_or_else(|| ParseNode::branch(ROOT_TAG, Vec::new())))
}

fn to_node(pair: Pair<'_, Rule>) -> ParseNode {
    let rule = pair.as_rule();
    match rule {
        Rule::program => ParseNode::branch(ROOT_TAG, pair.into_inner().map(to_node).collect()),
        Rule::sexpr => ParseNode::branch("expr|sexpr", pair.into_inner().map(to_node).collect()),
        Rule::qexpr => ParseNode::branch("expr|qexpr", pair.into_inner().map(to_node).collect()),
        Rule::number => ParseNode::leaf("expr|number", pair.as_str()),
        Rule::symbol => ParseNode::leaf("expr|symbol", pair.as_str()),
        Rule::open_paren | Rule::close_paren | Rule::open_brace | Rule::close_brace => {
            ParseNode::leaf(DELIMITER_TAG, pair.as_str())
        }
        Rule::EOI => ParseNode::leaf(RAW_TAG, ""),
        other => ParseNode::leaf(format!("{:?}", other), pair.as_str()),
    }
}
