//! Conversion from a parse tree to a value tree

use crate::error::EvalError;
use crate::node::ParseNode;
use crate::value::Value;

/// Build a value tree from a parse-tree node.
///
/// The parse tree is only borrowed; all text is copied into the new values.
/// Malformed leaves become error values inside the tree instead of aborting
/// the read, so `read` always produces a value.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }

    let list = if node.is_root() || node.tag.contains("sexpr") {
        Value::sexpr()
    } else if node.tag.contains("qexpr") {
        Value::qexpr()
    } else {
        return Value::error(EvalError::UnrecognizedSyntax {
            tag: node.tag.clone(),
        });
    };

    node.children
        .iter()
        .filter(|child| !child.is_structural())
        .fold(list, |list, child| list.add(read(child)))
}

fn read_number(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::error(EvalError::InvalidNumber {
            literal: literal.to_string(),
        }),
    }
}
