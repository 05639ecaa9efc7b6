//! Ownership-transferring list primitives shared by the reader, the
//! evaluator and the builtins.
//!
//! Each operation consumes the list it works on (or borrows it mutably and
//! hands back the removed element), so an element always has exactly one
//! owner. Calling any of them on a value that is not an S-expression or
//! Q-expression is a contract violation and panics, in the same way that
//! indexing past the end of a `Vec` does.

use super::Value;
use crate::error::type_name;

impl Value {
    /// Borrow the elements of an S-expression or Q-expression.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Number of elements in a list; zero for anything else.
    pub fn len(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }

    /// True for `()`, `{}` and every non-list value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `item` to the end of this list and return the list.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list.
    pub fn add(mut self, item: Value) -> Value {
        self.cells_mut("add").push(item);
        self
    }

    /// Remove and return the element at `index`, shifting later elements
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list or `index` is out of bounds.
    pub fn pop(&mut self, index: usize) -> Value {
        self.cells_mut("pop").remove(index)
    }

    /// Remove the element at `index` and drop the rest of the list.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list or `index` is out of bounds.
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Move every element of `other` onto the end of this list, in order.
    ///
    /// # Panics
    ///
    /// Panics if either value is not a list.
    pub fn join(mut self, other: Value) -> Value {
        let moved = other.into_cells("join");
        self.cells_mut("join").extend(moved);
        self
    }

    /// Retag a list as a Q-expression without touching its elements.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list.
    pub fn into_qexpr(self) -> Value {
        Value::QExpr(self.into_cells("into_qexpr"))
    }

    /// Retag a list as an S-expression without touching its elements.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list.
    pub fn into_sexpr(self) -> Value {
        Value::SExpr(self.into_cells("into_sexpr"))
    }

    fn cells_mut(&mut self, op: &str) -> &mut Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => panic!("list operation `{}` applied to {}", op, type_name(other)),
        }
    }

    fn into_cells(self, op: &str) -> Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => panic!("list operation `{}` applied to {}", op, type_name(&other)),
        }
    }
}
