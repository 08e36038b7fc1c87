//! Configuration options for a run.

use crate::arena::ArenaOptions;
use crate::evaluator::EvaluatorOptions;
use crate::parser;

/// Everything that bounds a run: pool capacities, parse nesting and
/// evaluation depth.
///
/// # Example
///
/// ```
/// use debruijn_core::api::Options;
/// use debruijn_core::evaluator::EvaluatorOptions;
///
/// let options = Options {
///     evaluator: EvaluatorOptions { max_depth: 500 },
///     ..Options::default()
/// };
/// assert_eq!(options.arena.max_terms, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Capacities of the three arena pools.
    pub arena: ArenaOptions,

    /// Evaluation limits.
    pub evaluator: EvaluatorOptions,

    /// Maximum term nesting accepted by the parser.
    ///
    /// Default: 1 000
    pub max_parse_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            arena: ArenaOptions::default(),
            evaluator: EvaluatorOptions::default(),
            max_parse_depth: parser::DEFAULT_MAX_DEPTH,
        }
    }
}
