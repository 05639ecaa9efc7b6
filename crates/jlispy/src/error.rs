//! Error types for JLispy
//!
//! Evaluation failures are ordinary values: an [`EvalError`] travels inside
//! [`Value::Error`] through the same channel as every successful result.
//! [`JlispyError`] covers what happens around evaluation (reading source
//! files, parsing text) and is never stored in a value tree.

use thiserror::Error;

use crate::frontend::ParseError;
use crate::value::Value;

/// Reasons an evaluation can fail.
///
/// The `Display` output is the stable, user-facing message that the printer
/// shows after `Error: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric literal that does not fit in a 64-bit signed integer
    #[error("invalid number")]
    InvalidNumber {
        /// The literal text as written
        literal: String,
    },

    /// The reader met a parse-tree node it has no conversion for
    #[error("unrecognized syntax node")]
    UnrecognizedSyntax {
        /// Tag of the offending node
        tag: String,
    },

    /// An S-expression with two or more elements whose head is not a symbol
    #[error("S-expression does not start with symbol")]
    NotASymbol {
        /// Kind of value found in function position
        got: &'static str,
    },

    /// A symbol in function position that names no builtin
    #[error("unknown function")]
    UnknownFunction {
        /// The symbol text
        name: String,
    },

    /// A builtin received the wrong number of arguments
    #[error("Function '{function}' passed wrong number of arguments (expected {expected}, got {got})")]
    ArgumentCount {
        /// Builtin name
        function: &'static str,
        /// Number of arguments the builtin takes
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// A builtin that needs at least one argument received none
    #[error("Function '{function}' passed no arguments")]
    NoArguments {
        /// Builtin name
        function: &'static str,
    },

    /// A builtin received an argument of the wrong kind
    #[error("Function '{function}' passed incorrect type (expected {expected}, got {got})")]
    ArgumentType {
        /// Builtin name
        function: &'static str,
        /// Kind the builtin accepts
        expected: &'static str,
        /// Kind that was supplied
        got: &'static str,
    },

    /// `head` or `tail` applied to `{}`
    #[error("Function '{function}' passed {{}}")]
    EmptyList {
        /// Builtin name
        function: &'static str,
    },

    /// An arithmetic operand that is not a number
    #[error("cannot operate on non-numeric value")]
    NonNumeric {
        /// Operator symbol
        function: &'static str,
        /// Kind of the offending operand
        got: &'static str,
    },

    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic result outside the 64-bit signed range
    #[error("integer overflow")]
    IntegerOverflow,

    /// Expression nesting deeper than the configured limit
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded {
        /// The limit that was hit
        limit: usize,
    },
}

/// Errors raised around evaluation rather than by it.
#[derive(Error, Debug)]
pub enum JlispyError {
    /// Source text did not match the grammar
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A source file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for host-level operations
pub type Result<T> = std::result::Result<T, JlispyError>;

/// User-facing name of a value's kind, as used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "Number",
        Value::Error(_) => "Error",
        Value::Symbol(_) => "Symbol",
        Value::SExpr(_) => "S-Expression",
        Value::QExpr(_) => "Q-Expression",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_builtin() {
        let err = EvalError::ArgumentCount {
            function: "tail",
            expected: 1,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "Function 'tail' passed wrong number of arguments (expected 1, got 2)"
        );

        let err = EvalError::EmptyList { function: "head" };
        assert_eq!(err.to_string(), "Function 'head' passed {}");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: JlispyError = io.into();
        assert!(matches!(err, JlispyError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
