//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the side to move has no legal move.
    pub best_move: Option<Square>,
    /// Minimax value of the best move from the searching side's view.
    pub score: Score,
    /// Depth searched in plies.
    pub depth: Depth,
    /// Number of tree nodes visited.
    pub n_nodes: u64,
    /// Every root move with its exact minimax value, in generation order.
    pub root_scores: Vec<(Square, Score)>,
}

impl SearchResult {
    /// Creates the result for a position where the side to move must pass.
    pub fn no_move(depth: Depth) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            n_nodes: 1,
            root_scores: Vec::new(),
        }
    }
}
