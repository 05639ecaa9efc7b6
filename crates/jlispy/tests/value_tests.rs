//! Tests for the Value type, list primitives and the printer

use jlispy::node::{DELIMITER_TAG, RAW_TAG, ROOT_TAG};
use jlispy::{read, EvalError, ParseNode, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_structural_equality() {
    let a = Value::QExpr(vec![Value::Number(1), Value::SExpr(vec![Value::symbol("x")])]);
    let b = Value::QExpr(vec![Value::Number(1), Value::SExpr(vec![Value::symbol("x")])]);
    let c = Value::SExpr(vec![Value::Number(1), Value::SExpr(vec![Value::symbol("x")])]);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_clone_is_deep() {
    let original = Value::QExpr(vec![Value::symbol("tail"), Value::Number(2)]);
    let mut copy = original.clone();
    copy.pop(0);

    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 1);
}

#[test]
fn test_extractors() {
    assert_eq!(Value::Number(9).as_number(), Some(9));
    assert_eq!(Value::symbol("eval").as_symbol(), Some("eval"));
    assert_eq!(
        Value::error(EvalError::DivisionByZero).as_error(),
        Some(&EvalError::DivisionByZero)
    );
    assert_eq!(Value::qexpr().as_number(), None);
    assert_eq!(Value::from(4), Value::Number(4));
    assert_eq!(
        Value::from(EvalError::IntegerOverflow),
        Value::error(EvalError::IntegerOverflow)
    );
}

#[test]
fn test_list_operations_chain() {
    let list = Value::qexpr()
        .add(Value::Number(1))
        .add(Value::Number(2))
        .join(Value::QExpr(vec![Value::Number(3)]));
    assert_eq!(list.to_string(), "{1 2 3}");

    let mut list = list;
    let popped = list.pop(1);
    assert_eq!(popped, Value::Number(2));
    assert_eq!(list.to_string(), "{1 3}");
    assert_eq!(list.take(1), Value::Number(3));
}

#[test]
fn test_printer_formats() {
    let value = Value::SExpr(vec![
        Value::symbol("join"),
        Value::QExpr(vec![Value::Number(-1)]),
        Value::qexpr(),
        Value::sexpr(),
    ]);
    assert_eq!(value.to_string(), "(join {-1} {} ())");
    assert_eq!(
        Value::error(EvalError::UnknownFunction {
            name: "x".to_string()
        })
        .to_string(),
        "Error: unknown function"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Reader over hand-built trees
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_mpc_style_tags() {
    // Tags only need to contain the category name.
    let tree = ParseNode::branch(
        ROOT_TAG,
        vec![
            ParseNode::leaf(RAW_TAG, ""),
            ParseNode::leaf("expr|symbol|string", "+"),
            ParseNode::leaf("expr|number|regex", "4"),
            ParseNode::branch(
                "expr|sexpr|>",
                vec![
                    ParseNode::leaf(DELIMITER_TAG, "("),
                    ParseNode::leaf("expr|number|regex", "5"),
                    ParseNode::leaf(DELIMITER_TAG, ")"),
                ],
            ),
            ParseNode::leaf(RAW_TAG, ""),
        ],
    );
    assert_eq!(
        read(&tree),
        Value::SExpr(vec![
            Value::symbol("+"),
            Value::Number(4),
            Value::SExpr(vec![Value::Number(5)]),
        ])
    );
}

#[test]
fn test_read_does_not_touch_tree() {
    let tree = ParseNode::branch(
        "expr|qexpr",
        vec![ParseNode::leaf("expr|number", "1")],
    );
    let before = tree.clone();
    let _ = read(&tree);
    assert_eq!(tree, before);
}

#[test]
fn test_read_unrecognized_child_stays_in_place() {
    let tree = ParseNode::branch(
        "expr|qexpr",
        vec![
            ParseNode::leaf("expr|number", "1"),
            ParseNode::leaf("comment", "; hi"),
        ],
    );
    assert_eq!(read(&tree).to_string(), "{1 Error: unrecognized syntax node}");
}
