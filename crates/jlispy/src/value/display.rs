//! Display implementation for Value (the printer)

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(e) => write!(f, "Error: {}", e),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::SExpr(cells) => write_cells(f, cells, '(', ')'),
            Value::QExpr(cells) => write_cells(f, cells, '{', '}'),
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn test_display_atoms() {
        assert_eq!(Value::Number(-12).to_string(), "-12");
        assert_eq!(Value::symbol("join").to_string(), "join");
        assert_eq!(
            Value::error(EvalError::DivisionByZero).to_string(),
            "Error: division by zero"
        );
    }

    #[test]
    fn test_display_nested_lists() {
        let inner = Value::QExpr(vec![Value::Number(2), Value::Number(3)]);
        let outer = Value::SExpr(vec![Value::symbol("+"), Value::Number(1), inner]);
        assert_eq!(outer.to_string(), "(+ 1 {2 3})");
    }

    #[test]
    fn test_display_empty_lists() {
        assert_eq!(Value::sexpr().to_string(), "()");
        assert_eq!(Value::qexpr().to_string(), "{}");
    }
}
