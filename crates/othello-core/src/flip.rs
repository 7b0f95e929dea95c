//! Flip resolution for a placed disc.

use std::slice;

use arrayvec::ArrayVec;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::cell::Cell;
use crate::constants::MAX_FLIPS;
use crate::player::Player;
use crate::square::Square;

/// The eight compass directions as `(row, column)` steps, in enumeration order.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Ordered sequence of the squares captured by a move.
///
/// Squares are grouped direction by direction in [`DIRECTIONS`] order and,
/// within a direction, listed from the placed disc outward. The order never
/// affects the resulting board; it only makes enumeration reproducible for
/// callers that reveal flips one by one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipSet {
    squares: ArrayVec<Square, MAX_FLIPS>,
}

impl FlipSet {
    /// Returns the number of captured discs.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns `true` when nothing is captured, i.e. the move is illegal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Checks whether a square is captured.
    pub fn contains(&self, sq: Square) -> bool {
        self.squares.contains(&sq)
    }

    /// Iterates over the captured squares in enumeration order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Square> {
        self.squares.iter()
    }

    /// Returns the captured squares as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }

    /// Returns the captured squares as an unordered bitboard.
    pub fn bitboard(&self) -> Bitboard {
        self.squares
            .iter()
            .fold(Bitboard::default(), |bb, &sq| bb.set(sq))
    }
}

impl<'a> IntoIterator for &'a FlipSet {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Calculates which opponent discs `player` would capture by placing at `sq`.
///
/// Each direction is walked outward from `sq` while the cells belong to the
/// opponent; the run is captured only if the walk then lands on a disc of
/// `player`. Runs that fall off the board or reach an empty cell capture
/// nothing.
///
/// # Returns
///
/// The ordered [`FlipSet`]; empty if `sq` is occupied or the move is illegal.
pub fn flips(board: &Board, player: Player, sq: Square) -> FlipSet {
    let mut result = FlipSet::default();
    if board.get(sq) != Cell::Empty {
        return result;
    }

    let own = player.to_cell();
    let opp = player.opponent().to_cell();
    for &(dr, dc) in &DIRECTIONS {
        let mut run: ArrayVec<Square, 8> = ArrayVec::new();
        let mut cursor = sq.offset(dr, dc);
        while let Some(next) = cursor {
            if board.get(next) != opp {
                break;
            }
            run.push(next);
            cursor = next.offset(dr, dc);
        }

        if !run.is_empty() && cursor.is_some_and(|end| board.get(end) == own) {
            result.squares.extend(run);
        }
    }
    result
}
