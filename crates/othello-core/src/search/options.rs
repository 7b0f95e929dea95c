//! Search configuration.

use crate::constants::TERMINAL_SCORE;
use crate::eval::Eval;
use crate::types::Score;

/// Tunable parameters of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Leaf evaluator.
    pub eval: Eval,
    /// Base value of a won game; a lost game scores the negation.
    ///
    /// Must exceed [`Eval::max_magnitude`] so decided games outrank every
    /// heuristic leaf.
    pub terminal_score: Score,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            eval: Eval::default(),
            terminal_score: TERMINAL_SCORE,
        }
    }
}
