//! Rules engine: move generation, move application and end-of-game detection.
//!
//! These are the operations a driver needs to run a game. All of them are
//! pure functions of their arguments; the board passed in is never changed.

use std::cmp::Ordering;

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::flip::FlipSet;
use crate::player::Player;
use crate::square::Square;

/// Result of a game, derived from the disc counts once neither side can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameOutcome {
    /// Derives the final result from disc counts.
    pub fn from_counts(black: u32, white: u32) -> GameOutcome {
        match black.cmp(&white) {
            Ordering::Greater => GameOutcome::BlackWins,
            Ordering::Less => GameOutcome::WhiteWins,
            Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Returns the winning side, if the game is decided.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::BlackWins => Some(Player::Black),
            GameOutcome::WhiteWins => Some(Player::White),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

/// Turn state of a game.
///
/// * `ToMove(p)` - `p` has at least one legal move and must play one.
/// * `Passed(p)` - `p` has no legal move; the opponent moves next on the same board.
/// * `Terminal(outcome)` - neither side can move. Absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    ToMove(Player),
    Passed(Player),
    Terminal(GameOutcome),
}

/// Returns the standard starting position.
pub fn create_initial_board() -> Board {
    Board::new()
}

/// Returns the legal moves of `player` in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Square> {
    board.get_moves(player).iter().collect()
}

/// Returns the number of legal moves of `player`.
#[inline]
pub fn mobility(board: &Board, player: Player) -> u32 {
    board.get_moves(player).count()
}

/// Checks whether `player` has at least one legal move.
#[inline]
pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    !board.get_moves(player).is_empty()
}

/// Plays `sq` for `player`.
///
/// # Returns
///
/// The resulting board and the captured discs. `board` itself is left as is.
///
/// # Errors
///
/// Returns [`RulesError::IllegalMove`] if the square is occupied or captures
/// nothing. No board is produced in that case.
pub fn apply(board: &Board, sq: Square, player: Player) -> RulesResult<(Board, FlipSet)> {
    let flips = board.flips(player, sq);
    if flips.is_empty() {
        return Err(RulesError::IllegalMove { square: sq, player });
    }

    let next = board.make_move_with_flipped(sq, player, flips.bitboard());
    Ok((next, flips))
}

/// Returns the disc counts as `(black, white)`.
#[inline]
pub fn count(board: &Board) -> (u32, u32) {
    board.count()
}

/// Returns the final result, or `None` while at least one side can move.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if has_legal_moves(board, Player::Black) || has_legal_moves(board, Player::White) {
        return None;
    }
    let (black, white) = board.count();
    Some(GameOutcome::from_counts(black, white))
}

/// Like [`outcome`], but reports a running game as [`GameOutcome::InProgress`].
pub fn status(board: &Board) -> GameOutcome {
    outcome(board).unwrap_or(GameOutcome::InProgress)
}

/// Checks whether neither side can move.
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    outcome(board).is_some()
}

/// Resolves whose turn it is when `player` is nominally to move on `board`.
pub fn next_turn(board: &Board, player: Player) -> TurnState {
    if has_legal_moves(board, player) {
        TurnState::ToMove(player)
    } else if has_legal_moves(board, player.opponent()) {
        TurnState::Passed(player)
    } else {
        let (black, white) = board.count();
        TurnState::Terminal(GameOutcome::from_counts(black, white))
    }
}
