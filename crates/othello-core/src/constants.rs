//! Global constants

use crate::types::Score;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Weight applied to the mobility differential by the evaluator.
pub const MOBILITY_WEIGHT: Score = 5;

/// Base score of a decided game inside the search tree.
///
/// Must stay above any heuristic value the evaluator can produce.
pub const TERMINAL_SCORE: Score = 10_000;

/// Infinity score for search bounds.
pub const SCORE_INF: Score = 30_000;

/// Upper bound on the number of discs a single move can flip.
pub const MAX_FLIPS: usize = 32;
