//! Call-by-value evaluator.
//!
//! Reduces a [`Term`] under an [`Env`] to a [`Value`]. Application extends
//! the closure's captured environment instead of rewriting the tree, and
//! abstraction captures the current environment by reference.
//!
//! ## Example
//!
//! ```
//! use debruijn_core::{arena::Arena, evaluator, parser, values::Env};
//!
//! let arena = Arena::default();
//! let term = parser::parse(&arena, "? 0 1 2").unwrap();
//! let value = evaluator::eval(&arena, term, Env::empty()).unwrap();
//! assert_eq!(value.to_string(), "2");
//! ```

mod error;
mod eval;

#[cfg(test)]
mod eval_test;

pub use error::{EvalError, Operation};
pub use eval::Evaluator;

use crate::{
    arena::Arena,
    term::Term,
    values::{Env, Value},
};

/// Default limit on evaluation recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

/// Configuration options for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation recursion depth.
    ///
    /// Every nested evaluation (an operand, a branch, a function body) is one
    /// level. The limit keeps runaway recursion from overflowing the native
    /// stack; the caller still needs a stack large enough for `max_depth`.
    ///
    /// Default: 100 000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate `term` under `env` with default options.
pub fn eval<'a>(
    arena: &'a Arena,
    term: &'a Term<'a>,
    env: &'a Env<'a>,
) -> Result<&'a Value<'a>, EvalError> {
    eval_with_options(arena, term, env, EvaluatorOptions::default())
}

/// Evaluate `term` under `env` with custom options.
pub fn eval_with_options<'a>(
    arena: &'a Arena,
    term: &'a Term<'a>,
    env: &'a Env<'a>,
    options: EvaluatorOptions,
) -> Result<&'a Value<'a>, EvalError> {
    Evaluator::new(options, arena).eval(term, env)
}
