//! Generic parse tree consumed by the reader
//!
//! A [`ParseNode`] is deliberately untyped: a `|`-joined tag naming the
//! grammar categories the node matched, the literal text for leaves, and
//! ordered children. The reader interprets tags by substring, so a node
//! tagged `expr|number` is a number wherever it appears.

use serde::Serialize;

/// Tag of the tree root.
pub const ROOT_TAG: &str = ">";

/// Tag of structural delimiter tokens.
pub const DELIMITER_TAG: &str = "char";

/// Tag of raw anchor tokens (start/end of input) that carry no value.
pub const RAW_TAG: &str = "regex";

/// Literal texts that only delimit lists.
pub const DELIMITERS: [&str; 4] = ["(", ")", "{", "}"];

/// One node of a parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    /// Grammar categories, most general first, joined by `|`
    pub tag: String,

    /// Literal source text (leaves only; empty for branches)
    pub contents: String,

    /// Child nodes in source order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a leaf node.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create a branch node with the given children.
    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// True for the root of a tree.
    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// True for nodes that shape the tree but carry no value: list
    /// delimiters and raw anchor tokens.
    pub fn is_structural(&self) -> bool {
        self.tag == RAW_TAG || DELIMITERS.contains(&self.contents.as_str())
    }
}
