//! Game session state.
//!
//! This module provides the `GameState` struct, an explicit session value a
//! driver owns instead of process-wide board and turn variables. It applies
//! moves and then advances the turn through passes and into the terminal
//! state, following the rules in [`crate::rules::next_turn`].

use tracing::trace;

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::flip::FlipSet;
use crate::player::Player;
use crate::rules::{self, GameOutcome, TurnState};
use crate::square::Square;

/// What happened as a consequence of a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Discs captured by the move, in enumeration order.
    pub flips: FlipSet,
    /// The side that had to pass right after the move, if any.
    pub passed: Option<Player>,
    /// Turn state after the move (never `Passed`).
    pub turn: TurnState,
}

/// Represents the state of a game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Resolved turn state; always `ToMove` or `Terminal`.
    turn: TurnState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Creates a game from an existing position.
    ///
    /// If `side_to_move` has no legal move the turn is resolved immediately,
    /// either to the opponent or to the terminal state.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player is nominally to move
    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            turn: resolve_turn(&board, side_to_move).0,
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns the side to move, or `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Player> {
        match self.turn {
            TurnState::ToMove(player) | TurnState::Passed(player) => Some(player),
            TurnState::Terminal(_) => None,
        }
    }

    /// Returns the legal moves of the side to move (empty once the game is over).
    pub fn legal_moves(&self) -> Vec<Square> {
        self.side_to_move()
            .map(|player| rules::legal_moves(&self.board, player))
            .unwrap_or_default()
    }

    /// Plays a move for the side to move and advances the turn.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::IllegalMove`] if the move is not legal and
    /// [`RulesError::GameOver`] once the game has ended. The state is
    /// unchanged in both cases.
    pub fn make_move(&mut self, sq: Square) -> RulesResult<MoveOutcome> {
        let TurnState::ToMove(player) = self.turn else {
            return Err(RulesError::GameOver);
        };

        let (next, flips) = rules::apply(&self.board, sq, player)?;
        let (turn, passed) = resolve_turn(&next, player.opponent());

        self.board = next;
        self.turn = turn;
        Ok(MoveOutcome {
            flips,
            passed,
            turn,
        })
    }

    /// Returns the final result, or `None` while the game continues.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.turn {
            TurnState::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the disc counts as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        self.board.count()
    }
}

/// Resolves the turn for `player`, collapsing a pass into the opponent's turn.
///
/// # Returns
///
/// The resolved state (never `Passed`) and the side that passed, if any.
fn resolve_turn(board: &Board, player: Player) -> (TurnState, Option<Player>) {
    match rules::next_turn(board, player) {
        TurnState::Passed(passer) => {
            trace!(%passer, "no legal move, passing");
            (TurnState::ToMove(passer.opponent()), Some(passer))
        }
        TurnState::Terminal(outcome) => {
            trace!(?outcome, "game over");
            (TurnState::Terminal(outcome), None)
        }
        to_move => (to_move, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Some(Player::Black));
        assert_eq!(game.turn(), TurnState::ToMove(Player::Black));
        assert!(!game.is_game_over());
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        let result = game.make_move(Square::D3).unwrap();
        assert_eq!(result.flips.as_slice(), &[Square::D4]);
        assert_eq!(result.passed, None);
        assert_eq!(result.turn, TurnState::ToMove(Player::White));
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn test_illegal_move_leaves_state() {
        let mut game = GameState::new();
        let before = *game.board();
        assert!(game.make_move(Square::A1).is_err());
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Some(Player::Black));
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        game.make_move(Square::D3).unwrap();
        assert_eq!(game.side_to_move(), Some(Player::White));
        game.make_move(Square::C3).unwrap();
        assert_eq!(game.side_to_move(), Some(Player::Black));
    }

    #[test]
    fn test_from_board_resolves_pass() {
        // Black has no move; White can capture B1 from C1.
        let board = Board::from_string(
            "OX------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        )
        .unwrap();
        let game = GameState::from_board(board, Player::Black);
        assert_eq!(game.side_to_move(), Some(Player::White));
        assert_eq!(game.legal_moves(), vec![Square::C1]);
    }

    #[test]
    fn test_pass_then_terminal() {
        // After White plays C1 only white discs remain, so neither side can move.
        let board = Board::from_string(
            "OX------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Player::White);
        let result = game.make_move(Square::C1).unwrap();
        assert_eq!(result.passed, None);
        assert_eq!(result.turn, TurnState::Terminal(GameOutcome::WhiteWins));
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::WhiteWins));
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.make_move(Square::D1), Err(RulesError::GameOver));
    }

    #[test]
    fn test_full_random_game_reaches_terminal() {
        let mut game = GameState::new();
        let mut plies = 0;
        while let Some(&sq) = game.legal_moves().first() {
            let discs_before = game.score().0 + game.score().1;
            game.make_move(sq).unwrap();
            assert_eq!(game.score().0 + game.score().1, discs_before + 1);
            plies += 1;
            assert!(plies <= 60);
        }
        assert!(game.is_game_over());
        let (black, white) = game.score();
        assert_eq!(game.outcome(), Some(GameOutcome::from_counts(black, white)));
    }
}
