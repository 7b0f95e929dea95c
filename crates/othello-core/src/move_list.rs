//! Move generation for a position.

use std::slice;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::constants::BOARD_SQUARES;
use crate::flip::FlipSet;
use crate::player::Player;
use crate::square::Square;

/// A legal move together with the discs it captures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Opponent discs captured by this move, in enumeration order.
    pub flips: FlipSet,
}

/// All legal moves of one side, in row-major order.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, BOARD_SQUARES>,
}

impl MoveList {
    /// Generates all legal moves for `player`.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to generate moves for
    /// * `player` - The side to move
    pub fn new(board: &Board, player: Player) -> MoveList {
        let moves = board
            .get_moves(player)
            .iter()
            .map(|sq| {
                let flips = board.flips(player, sq);
                debug_assert!(!flips.is_empty(), "generated move {sq} flips nothing");
                Move { sq, flips }
            })
            .collect();
        MoveList { moves }
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` when the side has no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the destination squares only.
    pub fn squares(&self) -> Vec<Square> {
        self.moves.iter().map(|m| m.sq).collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
