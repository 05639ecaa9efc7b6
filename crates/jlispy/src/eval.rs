//! Expression evaluation
//!
//! Evaluation is a depth-first reduction over an owned value tree. Only
//! S-expressions reduce; numbers, symbols, errors and Q-expressions are
//! already values and come back unchanged.
//!
//! Internally every step returns `Result<Value, EvalError>` so that `?`
//! short-circuits on the first failure. At the public boundary the error is
//! folded back into [`Value::Error`], keeping errors in the value channel.

use crate::builtins::Builtin;
use crate::context::EvalContext;
use crate::error::{type_name, EvalError};
use crate::value::Value;

/// Evaluate a value with the default context.
pub fn eval(value: Value) -> Value {
    eval_with(value, &EvalContext::default())
}

/// Evaluate a value with an explicit context.
pub fn eval_with(value: Value, ctx: &EvalContext) -> Value {
    reduce(value, ctx, 0).unwrap_or_else(Value::Error)
}

/// Reduce a value at the given nesting depth.
///
/// An error value already present in the tree is reported as a failure so
/// that it propagates like one raised during reduction.
pub(crate) fn reduce(value: Value, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
    match value {
        Value::SExpr(cells) => reduce_sexpr(cells, ctx, depth),
        Value::Error(err) => Err(err),
        other => Ok(other),
    }
}

fn reduce_sexpr(cells: Vec<Value>, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
    if depth >= ctx.max_depth {
        log::warn!("nesting depth limit of {} reached", ctx.max_depth);
        return Err(EvalError::DepthExceeded {
            limit: ctx.max_depth,
        });
    }

    // Children left to right; the first failure drops everything else.
    // Plain loop: two native frames per nesting level.
    let mut reduced = Vec::with_capacity(cells.len());
    for cell in cells {
        reduced.push(reduce(cell, ctx, depth + 1)?);
    }

    let mut expr = Value::SExpr(reduced);
    match expr.len() {
        0 => return Ok(expr),
        1 => return Ok(expr.take(0)),
        _ => {}
    }

    let name = match expr.pop(0) {
        Value::Symbol(name) => name,
        other => {
            return Err(EvalError::NotASymbol {
                got: type_name(&other),
            })
        }
    };

    match Builtin::lookup(&name) {
        Some(builtin) => builtin.apply(expr, ctx, depth),
        None => Err(EvalError::UnknownFunction { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sexpr(cells: Vec<Value>) -> Value {
        Value::SExpr(cells)
    }

    #[test]
    fn test_atoms_are_values() {
        assert_eq!(eval(Value::Number(3)), Value::Number(3));
        assert_eq!(eval(Value::symbol("+")), Value::symbol("+"));
        let quoted = Value::QExpr(vec![Value::symbol("+"), Value::Number(1)]);
        assert_eq!(eval(quoted.clone()), quoted);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(eval(Value::sexpr()), Value::sexpr());
        assert_eq!(eval(sexpr(vec![Value::Number(5)])), Value::Number(5));
    }

    #[test]
    fn test_nested_reduction() {
        let inner = sexpr(vec![Value::symbol("*"), Value::Number(2), Value::Number(3)]);
        let outer = sexpr(vec![Value::symbol("+"), Value::Number(1), inner]);
        assert_eq!(eval(outer), Value::Number(7));
    }

    #[test]
    fn test_head_must_be_symbol() {
        let expr = sexpr(vec![Value::Number(1), Value::Number(2)]);
        assert_eq!(
            eval(expr),
            Value::error(EvalError::NotASymbol { got: "Number" })
        );
    }

    #[test]
    fn test_unknown_function() {
        let expr = sexpr(vec![Value::symbol("frob"), Value::Number(2)]);
        assert_eq!(
            eval(expr),
            Value::error(EvalError::UnknownFunction {
                name: "frob".to_string()
            })
        );
    }

    #[test]
    fn test_first_error_wins() {
        let div = sexpr(vec![Value::symbol("/"), Value::Number(1), Value::Number(0)]);
        let unknown = sexpr(vec![Value::symbol("undefined-symbol")]);
        let expr = sexpr(vec![Value::symbol("+"), Value::Number(1), div, unknown]);
        assert_eq!(eval(expr), Value::error(EvalError::DivisionByZero));
    }

    #[test]
    fn test_depth_limit() {
        let mut expr = Value::Number(1);
        for _ in 0..10 {
            expr = sexpr(vec![expr]);
        }
        let ctx = EvalContext::with_max_depth(5);
        assert_eq!(
            eval_with(expr.clone(), &ctx),
            Value::error(EvalError::DepthExceeded { limit: 5 })
        );
        assert_eq!(eval(expr), Value::Number(1));
    }
}
