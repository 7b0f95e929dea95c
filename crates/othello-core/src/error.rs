//! Error types for rule violations.
//!
//! Every variant is a caller error that is detected before the board is
//! touched. A side having no legal move is a normal game state and is
//! reported as `None` by the relevant operations instead.

use thiserror::Error;

use crate::player::Player;
use crate::square::Square;

/// Errors raised by board-indexed and move-applying operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// The move does not flip any disc for this player, or the cell is occupied.
    #[error("illegal move {square} for {player}")]
    IllegalMove { square: Square, player: Player },

    /// A move was requested after the game ended.
    #[error("the game is over")]
    GameOver,

    /// A coordinate outside the 8x8 grid.
    #[error("coordinate ({row}, {col}) is outside the board (must be 0-7)")]
    OutOfBounds { row: usize, col: usize },
}

/// Result type alias for rule operations.
pub type RulesResult<T> = Result<T, RulesError>;

/// Errors raised when building a board from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 64 cells, found {0}")]
    Length(usize),

    #[error("invalid cell character '{ch}' at cell {index}")]
    InvalidChar { ch: char, index: usize },
}
