//! The fixed set of builtin operations
//!
//! Builtins form a closed set. The evaluator resolves the symbol at the head
//! of an S-expression with [`Builtin::lookup`] and hands the evaluated
//! operands to [`Builtin::apply`] as one argument S-expression.

use crate::context::EvalContext;
use crate::error::{type_name, EvalError};
use crate::eval::reduce;
use crate::value::Value;

/// A builtin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `list`: turn the arguments into a Q-expression
    List,
    /// `head`: keep only the first element of a Q-expression
    Head,
    /// `tail`: drop the first element of a Q-expression
    Tail,
    /// `join`: concatenate Q-expressions
    Join,
    /// `eval`: evaluate a Q-expression as an S-expression
    Eval,
    /// `+`
    Add,
    /// `-`, negation when given one operand
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Builtin {
    /// Every builtin, in the order they are documented.
    pub const ALL: [Builtin; 9] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
    ];

    /// Resolve a symbol name to a builtin.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Builtin::List),
            "head" => Some(Builtin::Head),
            "tail" => Some(Builtin::Tail),
            "join" => Some(Builtin::Join),
            "eval" => Some(Builtin::Eval),
            "+" => Some(Builtin::Add),
            "-" => Some(Builtin::Sub),
            "*" => Some(Builtin::Mul),
            "/" => Some(Builtin::Div),
            _ => None,
        }
    }

    /// The symbol this builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }

    /// Apply this builtin to an argument S-expression.
    ///
    /// `args` is consumed on every path; on failure everything it held has
    /// been dropped by the time the error is returned. `depth` is the
    /// nesting depth of the call site and only matters for `eval`.
    ///
    /// # Panics
    ///
    /// Panics if `args` is not a list.
    pub fn apply(self, args: Value, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
        log::trace!("dispatching `{}` with {} argument(s)", self.name(), args.len());

        match self {
            Builtin::List => Ok(args.into_qexpr()),
            Builtin::Head => builtin_head(args),
            Builtin::Tail => builtin_tail(args),
            Builtin::Join => builtin_join(args),
            Builtin::Eval => builtin_eval(args, ctx, depth),
            Builtin::Add => arithmetic(self, args, i64::checked_add),
            Builtin::Sub => arithmetic(self, args, i64::checked_sub),
            Builtin::Mul => arithmetic(self, args, i64::checked_mul),
            Builtin::Div => arithmetic(self, args, i64::checked_div),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// List Builtins
// ═══════════════════════════════════════════════════════════════════════

/// Take the single Q-expression argument of a builtin.
fn single_qexpr(function: &'static str, args: Value) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::ArgumentCount {
            function,
            expected: 1,
            got: args.len(),
        });
    }
    let list = args.take(0);
    if !list.is_qexpr() {
        return Err(EvalError::ArgumentType {
            function,
            expected: "Q-Expression",
            got: type_name(&list),
        });
    }
    Ok(list)
}

fn builtin_head(args: Value) -> Result<Value, EvalError> {
    let mut list = single_qexpr("head", args)?;
    if list.is_empty() {
        return Err(EvalError::EmptyList { function: "head" });
    }
    let first = list.pop(0);
    Ok(Value::qexpr().add(first))
}

fn builtin_tail(args: Value) -> Result<Value, EvalError> {
    let mut list = single_qexpr("tail", args)?;
    if list.is_empty() {
        return Err(EvalError::EmptyList { function: "tail" });
    }
    list.pop(0);
    Ok(list)
}

fn builtin_eval(args: Value, ctx: &EvalContext, depth: usize) -> Result<Value, EvalError> {
    let list = single_qexpr("eval", args)?;
    reduce(list.into_sexpr(), ctx, depth + 1)
}

fn builtin_join(mut args: Value) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::NoArguments { function: "join" });
    }
    if let Some(bad) = args.cells().into_iter().flatten().find(|v| !v.is_qexpr()) {
        return Err(EvalError::ArgumentType {
            function: "join",
            expected: "Q-Expression",
            got: type_name(bad),
        });
    }

    let mut joined = args.pop(0);
    while !args.is_empty() {
        joined = joined.join(args.pop(0));
    }
    Ok(joined)
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

/// Checked binary step of an arithmetic builtin; `None` means overflow.
type Step = fn(i64, i64) -> Option<i64>;

/// Fold `step` over the numeric operands, left to right.
fn arithmetic(op: Builtin, args: Value, step: Step) -> Result<Value, EvalError> {
    let function = op.name();
    let cells = args.cells().unwrap_or_default();

    let mut operands = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            Value::Number(n) => operands.push(*n),
            other => {
                return Err(EvalError::NonNumeric {
                    function,
                    got: type_name(other),
                })
            }
        }
    }

    let (&first, rest) = operands
        .split_first()
        .ok_or(EvalError::NoArguments { function })?;

    if op == Builtin::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or(EvalError::IntegerOverflow);
    }

    let mut acc = first;
    for &n in rest {
        if op == Builtin::Div && n == 0 {
            return Err(EvalError::DivisionByZero);
        }
        acc = step(acc, n).ok_or(EvalError::IntegerOverflow)?;
    }
    Ok(Value::Number(acc))
}
