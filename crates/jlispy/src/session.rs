//! Parse, read, evaluate: one input at a time
//!
//! A [`Session`] holds no state between inputs beyond its configuration;
//! every call builds, reduces and drops its own value tree.

use std::path::Path;

use crate::context::EvalContext;
use crate::error::Result;
use crate::eval::eval_with;
use crate::frontend::{self, ParseError};
use crate::node::ParseNode;
use crate::reader::read;
use crate::value::Value;

/// Source name used for interactive input.
pub const STDIN_NAME: &str = "<stdin>";

/// Evaluates JLispy source text.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ctx: EvalContext,
}

impl Session {
    /// Create a session with the given evaluation context.
    pub fn new(ctx: EvalContext) -> Self {
        Self { ctx }
    }

    /// The evaluation context in use.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Parse interactive input without evaluating it.
    pub fn parse(&self, source: &str) -> std::result::Result<ParseNode, ParseError> {
        frontend::parse(source, STDIN_NAME)
    }

    /// Evaluate source text as one program.
    ///
    /// All top-level expressions form a single S-expression, so `+ 1 2`
    /// evaluates like `(+ 1 2)`.
    pub fn eval_source(&self, source: &str) -> std::result::Result<Value, ParseError> {
        self.eval_named(source, STDIN_NAME)
    }

    /// Evaluate one line of interactive input.
    ///
    /// Blank lines produce `None`.
    pub fn eval_line(&self, line: &str) -> std::result::Result<Option<Value>, ParseError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.eval_source(line).map(Some)
    }

    /// Read a file and evaluate its contents as one program.
    pub fn eval_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        Ok(self.eval_named(&source, &path.display().to_string())?)
    }

    fn eval_named(&self, source: &str, source_name: &str) -> std::result::Result<Value, ParseError> {
        let tree = frontend::parse(source, source_name)?;
        let value = read(&tree);
        log::debug!("evaluating {}: {}", source_name, value);
        Ok(eval_with(value, &self.ctx))
    }
}
