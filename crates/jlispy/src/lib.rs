//! # JLispy
//!
//! A small Lisp built around two kinds of list: S-expressions, which
//! evaluation reduces, and Q-expressions, which it leaves alone.
//!
//! ## Architecture
//!
//! - **Frontend**: Parse source text into a generic [`ParseNode`] tree
//! - **Reader**: Build an owned [`Value`] tree from the parse tree
//! - **Evaluator**: Reduce S-expressions, dispatching to [`Builtin`]s
//! - **Printer**: `Display` for [`Value`]
//!
//! Failures are values: a bad literal, a wrong argument or a division by
//! zero all come back as [`Value::Error`].
//!
//! ```
//! use jlispy::{eval, frontend, read, Value};
//!
//! let tree = frontend::parse("(- 10 2 3)", "<doc>").unwrap();
//! assert_eq!(eval(read(&tree)), Value::Number(5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod context;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod node;
pub mod reader;
pub mod session;
pub mod value;

// Re-export main types
pub use builtins::Builtin;
pub use context::{EvalContext, DEFAULT_MAX_DEPTH};
pub use error::{EvalError, JlispyError, Result};
pub use eval::{eval, eval_with};
pub use frontend::{ParseError, SourceLocation};
pub use node::ParseNode;
pub use reader::read;
pub use session::Session;
pub use value::Value;

/// JLispy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
