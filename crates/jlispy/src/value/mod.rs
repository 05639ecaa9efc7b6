//! Value representation for runtime values

mod display;
mod list;

use crate::error::EvalError;

/// Every runtime entity in JLispy.
///
/// A value tree is strictly owned: each element of an S-expression or
/// Q-expression belongs to exactly one parent, and dropping a value drops
/// its children before the node itself. Operations that consume a value
/// take it by move.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed 64-bit integer
    Number(i64),

    /// An evaluation failure
    Error(EvalError),

    /// An identifier naming a builtin, not yet resolved
    Symbol(String),

    /// An unevaluated expression list
    SExpr(Vec<Value>),

    /// A quoted list; evaluation never reduces it
    QExpr(Vec<Value>),
}

// ═══════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a number
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Create an error value
    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    /// Create a symbol, copying the name
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an empty S-expression
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Create an empty Q-expression
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if value is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is an S-expression
    pub fn is_sexpr(&self) -> bool {
        matches!(self, Value::SExpr(_))
    }

    /// Check if value is a Q-expression
    pub fn is_qexpr(&self) -> bool {
        matches!(self, Value::QExpr(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the integer of a number
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the name of a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Extract the error carried by an error value
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}
