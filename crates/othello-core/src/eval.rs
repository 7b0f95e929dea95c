//! Static position evaluation used at the leaves of the search.
//!
//! The score combines a positional weight table (corners good, the cells
//! next to corners bad, edges mildly good) with a mobility differential. It
//! is a heuristic only; decided games are scored by the search itself.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, MOBILITY_WEIGHT};
use crate::player::Player;
use crate::rules;
use crate::square::Square;
use crate::types::Score;

/// Per-cell weights, indexed `[row][col]`.
pub type WeightTable = [[Score; BOARD_SIZE]; BOARD_SIZE];

/// Default positional weights.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: WeightTable = [
    [100, -20,  10,   5,   5,  10, -20, 100],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [ 10,  -2,   1,   1,   1,   1,  -2,  10],
    [  5,  -2,   1,   0,   0,   1,  -2,   5],
    [  5,  -2,   1,   0,   0,   1,  -2,   5],
    [ 10,  -2,   1,   1,   1,   1,  -2,  10],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [100, -20,  10,   5,   5,  10, -20, 100],
];

/// Evaluator parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eval {
    /// Positional weight of each cell.
    pub weights: WeightTable,
    /// Multiplier for `mobility(player) - mobility(opponent)`.
    pub mobility_weight: Score,
}

impl Default for Eval {
    fn default() -> Self {
        Eval {
            weights: POSITION_WEIGHTS,
            mobility_weight: MOBILITY_WEIGHT,
        }
    }
}

impl Eval {
    /// Scores `board` from `player`'s point of view.
    ///
    /// # Returns
    ///
    /// The weighted sum of `player`'s cells minus the opponent's, plus the
    /// mobility differential times [`Eval::mobility_weight`].
    pub fn evaluate(&self, board: &Board, player: Player) -> Score {
        let opponent = player.opponent();
        let positional = self.positional(board, player) - self.positional(board, opponent);
        let mobility =
            rules::mobility(board, player) as Score - rules::mobility(board, opponent) as Score;
        positional + self.mobility_weight * mobility
    }

    /// Returns an upper bound on the magnitude of any [`Eval::evaluate`] result.
    pub fn max_magnitude(&self) -> Score {
        let positional: Score = self.weights.iter().flatten().map(|w| w.abs()).sum();
        positional + self.mobility_weight.abs() * 64
    }

    fn positional(&self, board: &Board, player: Player) -> Score {
        board
            .discs(player)
            .iter()
            .map(|sq: Square| self.weights[sq.row()][sq.col()])
            .sum()
    }
}

/// Scores `board` from `player`'s point of view with the default parameters.
pub fn score(board: &Board, player: Player) -> Score {
    Eval::default().evaluate(board, player)
}
