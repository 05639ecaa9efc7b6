//! Evaluation context configuration

/// Default nesting limit for [`EvalContext`].
///
/// Sized so that a full-depth reduction fits in a 2 MB thread stack in an
/// unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for evaluation.
///
/// This is passed through the evaluator and every builtin that recurses
/// back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum nesting depth of S-expression reduction (stack overflow
    /// protection)
    pub max_depth: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(EvalContext::new().max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(EvalContext::with_max_depth(8).max_depth, 8);
    }
}
